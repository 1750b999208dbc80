use thiserror::Error;

/// Failures raised while binding a parameter to its data, always before any
/// test case is combined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error(
        "no data source for parameter '{parameter}': an argument of type {expected} could not be found in the fixture's arguments"
    )]
    MissingDataSource { parameter: String, expected: String },

    #[error("member '{member}' of {owner} has unsupported kind '{kind}'; expected a field, property, or parameterless method")]
    UnsupportedMemberKind {
        owner: String,
        member: String,
        kind: String,
    },

    #[error("member '{member}' not found on {owner}")]
    MemberNotFound { owner: String, member: String },

    #[error("member '{member}' of {owner} is not a sequence (found {found})")]
    NotEnumerable {
        owner: String,
        member: String,
        found: String,
    },
}

impl BindingError {
    pub fn missing_data_source(parameter: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MissingDataSource {
            parameter: parameter.into(),
            expected: expected.into(),
        }
    }

    pub fn unsupported_member_kind(
        owner: impl Into<String>,
        member: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self::UnsupportedMemberKind {
            owner: owner.into(),
            member: member.into(),
            kind: kind.into(),
        }
    }

    pub fn member_not_found(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self::MemberNotFound {
            owner: owner.into(),
            member: member.into(),
        }
    }

    pub fn not_enumerable(
        owner: impl Into<String>,
        member: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::NotEnumerable {
            owner: owner.into(),
            member: member.into(),
            found: found.into(),
        }
    }
}
