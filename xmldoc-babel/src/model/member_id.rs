//! Code references as written by the compiler (`T:Namespace.Type`, `M:Type.Method(System.Int32)`, ...)

use crate::error::XmlDocError;
use std::fmt;
use std::str::FromStr;

/// The kind of symbol a [`MemberId`] refers to, taken from its one-letter prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Namespace,
    Type,
    Field,
    Property,
    Method,
    Event,
    /// `!:` ids, written by the compiler for references it could not resolve
    Unresolved,
    /// No recognized prefix; the whole string is the name
    Unknown,
}

impl MemberKind {
    fn from_prefix(prefix: &str) -> Option<Self> {
        let kind = match prefix {
            "N" => MemberKind::Namespace,
            "T" => MemberKind::Type,
            "F" => MemberKind::Field,
            "P" => MemberKind::Property,
            "M" => MemberKind::Method,
            "E" => MemberKind::Event,
            "!" => MemberKind::Unresolved,
            _ => return None,
        };
        Some(kind)
    }

    fn prefix(self) -> Option<char> {
        match self {
            MemberKind::Namespace => Some('N'),
            MemberKind::Type => Some('T'),
            MemberKind::Field => Some('F'),
            MemberKind::Property => Some('P'),
            MemberKind::Method => Some('M'),
            MemberKind::Event => Some('E'),
            MemberKind::Unresolved => Some('!'),
            MemberKind::Unknown => None,
        }
    }
}

/// A symbolic reference to a documented member.
///
/// Parsing never fails on the prefix: a string without a recognized `K:` prefix is kept whole
/// with kind [`MemberKind::Unknown`], so `cref` values written by hand still render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId {
    kind: MemberKind,
    name: String,
}

impl MemberId {
    pub fn new(kind: MemberKind, name: impl Into<String>) -> Result<Self, XmlDocError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(XmlDocError::invalid_argument(
                "name",
                "member name must not be empty",
            ));
        }
        Ok(MemberId { kind, name })
    }

    /// Parse a reference such as `T:System.String`.
    pub fn parse(id: &str) -> Result<Self, XmlDocError> {
        match id.split_once(':') {
            Some((prefix, name)) => match MemberKind::from_prefix(prefix) {
                Some(kind) => MemberId::new(kind, name),
                None => MemberId::new(MemberKind::Unknown, id),
            },
            None => MemberId::new(MemberKind::Unknown, id),
        }
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// The reference without its kind prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the id names a symbol: it has a member kind prefix other than `!`.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.kind, MemberKind::Unresolved | MemberKind::Unknown)
    }
}

impl FromStr for MemberId {
    type Err = XmlDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberId::parse(s)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.prefix() {
            Some(prefix) => write!(f, "{prefix}:{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
