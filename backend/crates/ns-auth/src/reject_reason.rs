/// Why a sign-in attempt was refused by the tenant gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No tenant id configured; every sign-in fails closed
    MissingTenantConfig,
    /// Neither an email nor a preferred_username claim was supplied
    MissingIdentifier,
    /// Absent or different tenant claim
    TenantMismatch,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingTenantConfig => "missing_tenant_config",
            Self::MissingIdentifier => "missing_identifier",
            Self::TenantMismatch => "tenant_mismatch",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
