// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! User interaction strings are stored here.

pub const LCG_NAME: &str = "First generator (LCG 48271, modulus 2^30)";
pub const LAGGED_NAME: &str = "Second generator (lagged subtractive 97/33)";
pub const REFERENCE_NAME: &str = "Reference generator (rand StdRng)";

pub const REPORT_TITLE: &str = "Bounded generator comparison";
pub const QUALITY_HEADER: &str = "Quality, samples of";
pub const THROUGHPUT_HEADER: &str = "Throughput:";

pub const MEAN_LABEL: &str = "Mean";
pub const DEVIATION_LABEL: &str = "Deviation";
pub const VARIATION_LABEL: &str = "Coefficient of variation";
pub const CHI_SQUARE_LABEL: &str = "Chi-square";
