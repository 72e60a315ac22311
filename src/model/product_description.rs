pub const LINUX_UNIX: &str = "Linux/UNIX";
pub const LINUX_UNIX_VPC: &str = "Linux/UNIX (Amazon VPC)";
pub const SUSE_LINUX: &str = "SUSE Linux";
pub const SUSE_LINUX_VPC: &str = "SUSE Linux (Amazon VPC)";
pub const WINDOWS: &str = "Windows";
pub const WINDOWS_VPC: &str = "Windows (Amazon VPC)";

pub const PRODUCT_DESCRIPTIONS: &[&str] = &[
    LINUX_UNIX,
    LINUX_UNIX_VPC,
    SUSE_LINUX,
    SUSE_LINUX_VPC,
    WINDOWS,
    WINDOWS_VPC,
];
