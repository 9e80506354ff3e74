//! Scene-level selection tests

mod shape_scenarios;
