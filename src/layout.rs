/// Structural roles a BBAN position can play. The set is closed; rules never
/// introduce new role letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    BankCode,
    AccountType,
    AccountNumber,
    ControlDigit,
    RegionalCode,
    BranchCode,
    OwnerNumber,
    Other,
}

impl Role {
    /// The letter marking this role inside a layout rule. Case matters:
    /// `k` and `K` are distinct roles.
    pub fn marker(self) -> char {
        match self {
            Role::BankCode => 'b',
            Role::AccountType => 'd',
            Role::AccountNumber => 'k',
            Role::ControlDigit => 'K',
            Role::RegionalCode => 'r',
            Role::BranchCode => 's',
            Role::OwnerNumber => 'O',
            Role::Other => 'X',
        }
    }
}

/// Inclusive character span `[first, last]` of `role` within a normalized
/// rule body (whitespace and header already removed). The span runs from the
/// first to the last occurrence of the role letter; positions of other roles
/// caught in between are part of the span.
pub fn role_span(rule_body: &str, role: Role) -> Option<(usize, usize)> {
    let marker = role.marker();
    let mut first = None;
    let mut last = None;

    for (index, ch) in rule_body.chars().enumerate() {
        if ch == marker {
            if first.is_none() {
                first = Some(index);
            }
            last = Some(index);
        }
    }

    Some((first?, last?))
}
