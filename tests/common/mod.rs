//! Shared roster builders for integration tests.

#![allow(dead_code)]

use u_cohort::model::{Gender, Group, Person, Role, StaffRecord};

pub fn leader(id: u32, gender: Gender, age: u32) -> Person {
    Person::new(id, format!("leader{id}"), gender, age, Role::Leader)
}

pub fn helper(id: u32, gender: Gender, age: u32) -> Person {
    Person::new(id, format!("helper{id}"), gender, age, Role::Helper)
}

pub fn member(id: u32, gender: Gender, age: u32, school: &str) -> Person {
    Person::new(id, format!("member{id}"), gender, age, Role::Member).with_school(school)
}

/// A group numbered `number` with a male leader (35) and a female helper
/// (30). Staff ids are `number * 1000` and `number * 1000 + 1`.
pub fn group(number: u32) -> Group {
    Group::new(
        number,
        leader(number * 1000, Gender::Male, 35),
        helper(number * 1000 + 1, Gender::Female, 30),
    )
}

/// Staff records for groups `1..=groups`, shaped like [`group`].
pub fn staff(groups: u32) -> Vec<StaffRecord> {
    (1..=groups)
        .flat_map(|g| {
            [
                StaffRecord::new(g, leader(g * 1000, Gender::Male, 35)),
                StaffRecord::new(g, helper(g * 1000 + 1, Gender::Female, 30)),
            ]
        })
        .collect()
}

/// `n` members with ids `1..=n`, alternating gender, ages 19..=28, and a
/// distinct school each.
pub fn pool(n: u32) -> Vec<Person> {
    (1..=n)
        .map(|i| {
            let gender = if i % 2 == 0 { Gender::Female } else { Gender::Male };
            member(i, gender, 19 + i % 10, &format!("school{i}"))
        })
        .collect()
}
