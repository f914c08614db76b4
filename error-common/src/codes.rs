// Stable error codes reported with every ClinicError

pub mod order {
    pub const DUPLICATE_ORDER_ID: &str = "ORDER_1001";
    pub const ORDER_ID_TOO_LARGE: &str = "ORDER_1002";
    pub const UNKNOWN_PATIENT: &str = "ORDER_1003";
    pub const MIXED_DIAGNOSTIC_ORDER: &str = "ORDER_1004";
    pub const DUPLICATE_ITEM_NUMBER: &str = "ORDER_1005";
    pub const NEGATIVE_ITEM_COST: &str = "ORDER_1006";
    pub const ALLOCATION_EXHAUSTED: &str = "ORDER_1007";
    pub const ORDER_NOT_FOUND: &str = "ORDER_1008";
    pub const TOTAL_OVERFLOW: &str = "ORDER_1009";
}

pub mod billing {
    pub const ORDER_NOT_FOUND: &str = "BILLING_2001";
    pub const PATIENT_NOT_FOUND: &str = "BILLING_2002";
}

pub mod patient {
    pub const INVALID_FIELD: &str = "PATIENT_3001";
    pub const ALREADY_REGISTERED: &str = "PATIENT_3002";
    pub const NOT_FOUND: &str = "PATIENT_3003";
    pub const HISTORY_ENTRY_NOT_FOUND: &str = "PATIENT_3004";
}

pub mod identity {
    pub const INVALID_USERNAME: &str = "IDENTITY_4001";
    pub const WEAK_PASSWORD: &str = "IDENTITY_4002";
    pub const USERNAME_TAKEN: &str = "IDENTITY_4003";
    pub const INVALID_CREDENTIALS: &str = "IDENTITY_4004";
    pub const HASHING: &str = "IDENTITY_4005";
}

pub mod config {
    pub const LOAD_FAILED: &str = "CONFIG_5001";
    pub const INVALID_VALUE: &str = "CONFIG_5002";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_9001";
}
