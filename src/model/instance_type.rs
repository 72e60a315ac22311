pub const T1_MICRO: &str = "t1.micro";
pub const M1_SMALL: &str = "m1.small";
pub const M1_MEDIUM: &str = "m1.medium";
pub const M1_LARGE: &str = "m1.large";
pub const M1_XLARGE: &str = "m1.xlarge";
pub const M3_XLARGE: &str = "m3.xlarge";
pub const M3_2XLARGE: &str = "m3.2xlarge";
pub const C1_MEDIUM: &str = "c1.medium";
pub const C1_XLARGE: &str = "c1.xlarge";
pub const M2_XLARGE: &str = "m2.xlarge";
pub const M2_2XLARGE: &str = "m2.2xlarge";
pub const M2_4XLARGE: &str = "m2.4xlarge";
pub const CR1_8XLARGE: &str = "cr1.8xlarge";
pub const CC1_4XLARGE: &str = "cc1.4xlarge";
pub const CC2_8XLARGE: &str = "cc2.8xlarge";
pub const CG1_4XLARGE: &str = "cg1.4xlarge";

/// Instance types known to this library. EC2 may accept more than these, so
/// requests are never checked against this list.
pub const INSTANCE_TYPES: &[&str] = &[
    T1_MICRO,
    M1_SMALL,
    M1_MEDIUM,
    M1_LARGE,
    M1_XLARGE,
    M3_XLARGE,
    M3_2XLARGE,
    C1_MEDIUM,
    C1_XLARGE,
    M2_XLARGE,
    M2_2XLARGE,
    M2_4XLARGE,
    CR1_8XLARGE,
    CC1_4XLARGE,
    CC2_8XLARGE,
    CG1_4XLARGE,
];
