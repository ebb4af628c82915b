//! Browser binding over a whole assignment run.
//!
//! Input records and the configuration arrive as plain JS objects shaped
//! like their serde representation; the output carries the flat rows, the
//! summary rows and the run report.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::engine::{AssignConfig, AssignRunner};
use crate::model::{Person, StaffRecord};
use crate::report::{AssignmentRow, RunReport, SummaryRow};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignOutput {
    rows: Vec<AssignmentRow>,
    summary: Vec<SummaryRow>,
    report: RunReport,
    seed: u64,
}

/// Runs the assignment for `staff` and `members`.
///
/// `config` may be `undefined` or `null` for the defaults. Errors are
/// returned as JS strings.
#[wasm_bindgen(js_name = assignGroups)]
pub fn assign_groups(
    staff: JsValue,
    members: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let staff: Vec<StaffRecord> = serde_wasm_bindgen::from_value(staff)?;
    let members: Vec<Person> = serde_wasm_bindgen::from_value(members)?;
    let config: AssignConfig = if config.is_undefined() || config.is_null() {
        AssignConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    let result = AssignRunner::run(staff, members, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let report = result.report();
    let output = AssignOutput {
        rows: result.rows(),
        summary: report.summary_rows(),
        report,
        seed: result.seed,
    };

    let serializer =
        serde_wasm_bindgen::Serializer::new().serialize_large_number_types_as_bigints(true);
    Ok(output.serialize(&serializer)?)
}
