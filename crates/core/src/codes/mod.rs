//! Error-code catalog: declarative code families with build-once registries.
//!
//! Each family declares a prefix and an ordered set of named members with a
//! default (zh_CN) message and optional per-locale variants. The full code of
//! a member combines the family prefix with the member's local code; the
//! combination rule is part of the family declaration because historically
//! not every family computed it the same way.
//!
//! A family's lookup table is built exactly once, on first access, and is
//! immutable afterwards. Concurrent first accesses are safe: the build is a
//! pure function of the static declaration, guarded by `OnceLock`.

use std::collections::HashMap;

use serde::Serialize;

use crate::i18n;

mod auth;
mod common;
mod token;

pub use auth::AuthCode;
pub use common::CommonCode;
pub use token::TokenCode;

/// How a family combines its prefix with a member's local code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStyle {
    /// Decimal concatenation, local code zero-padded to the given width
    /// (4000 + 1 → 400001). Members whose local code outgrows the width
    /// concatenate unpadded, matching the original arithmetic.
    Padded(u32),
    /// `prefix * 100 + local`.
    Multiply,
}

impl CodeStyle {
    pub fn full_code(&self, prefix: i64, local: i64) -> i64 {
        match self {
            CodeStyle::Padded(width) => {
                let digits = local.max(1).ilog10() + 1;
                let shift = 10i64.pow((*width).max(digits));
                prefix * shift + local
            }
            CodeStyle::Multiply => prefix * 100 + local,
        }
    }
}

/// Static declaration of one family member.
#[derive(Debug)]
pub struct MemberSpec {
    pub name: &'static str,
    pub local: i64,
    pub msg: &'static str,
    pub i18n: &'static [(&'static str, &'static str)],
}

/// Static declaration of a whole family.
#[derive(Debug)]
pub struct FamilyDescriptor {
    pub name: &'static str,
    pub prefix: i64,
    pub info: &'static str,
    pub style: CodeStyle,
    pub members: &'static [MemberSpec],
}

/// A resolved family member: declaration plus the derived full code.
#[derive(Debug)]
pub struct CodeEntry {
    pub name: &'static str,
    pub local: i64,
    pub code: i64,
    pub msg: &'static str,
    pub i18n: &'static [(&'static str, &'static str)],
}

/// Built lookup table for one family. Read-only after construction.
#[derive(Debug)]
pub struct FamilyTable {
    descriptor: &'static FamilyDescriptor,
    by_name: HashMap<&'static str, CodeEntry>,
}

impl FamilyTable {
    pub fn build(descriptor: &'static FamilyDescriptor) -> Self {
        let by_name = descriptor
            .members
            .iter()
            .map(|m| {
                let entry = CodeEntry {
                    name: m.name,
                    local: m.local,
                    code: descriptor.style.full_code(descriptor.prefix, m.local),
                    msg: m.msg,
                    i18n: m.i18n,
                };
                (m.name, entry)
            })
            .collect();

        Self {
            descriptor,
            by_name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn prefix(&self) -> i64 {
        self.descriptor.prefix
    }

    pub fn info(&self) -> &'static str {
        self.descriptor.info
    }

    /// Lookup by member name. Members are generated from the declaration, so
    /// a missing name is a bug in the macro, not a runtime condition.
    pub fn entry(&self, name: &str) -> &CodeEntry {
        &self.by_name[name]
    }

    /// Serializable view of the family, in declaration order.
    pub fn export(&self) -> FamilyExport {
        FamilyExport {
            family: self.descriptor.name,
            prefix: self.descriptor.prefix,
            info: self.descriptor.info,
            members: self
                .descriptor
                .members
                .iter()
                .map(|m| {
                    let entry = self.entry(m.name);
                    MemberExport {
                        name: entry.name,
                        value: entry.local,
                        code: entry.code,
                        msg: entry.msg,
                        i18n_msg: entry.i18n.iter().map(|(k, v)| (*k, *v)).collect(),
                        i18n_key: format!("code.common.{}", entry.code),
                    }
                })
                .collect(),
        }
    }
}

/// Serializable family dump (consumed by the code-query route).
#[derive(Debug, Serialize)]
pub struct FamilyExport {
    pub family: &'static str,
    pub prefix: i64,
    pub info: &'static str,
    pub members: Vec<MemberExport>,
}

#[derive(Debug, Serialize)]
pub struct MemberExport {
    pub name: &'static str,
    pub value: i64,
    pub code: i64,
    pub msg: &'static str,
    pub i18n_msg: HashMap<&'static str, &'static str>,
    pub i18n_key: String,
}

/// Behavior shared by every code-family enum.
pub trait ErrorCode: Copy + 'static {
    /// The family's built lookup table (built once, cached for the process).
    fn family() -> &'static FamilyTable
    where
        Self: Sized;

    fn name(&self) -> &'static str;

    fn local_code(&self) -> i64;

    fn entry(&self) -> &'static CodeEntry
    where
        Self: Sized,
    {
        Self::family().entry(self.name())
    }

    /// The full (prefix-combined) code.
    fn code(&self) -> i64
    where
        Self: Sized,
    {
        self.entry().code
    }

    /// Default-language message.
    fn msg(&self) -> &'static str
    where
        Self: Sized,
    {
        self.entry().msg
    }

    /// Locale variant, if one was declared. Locale tags are matched exactly
    /// first, then case-insensitively (`zh_HK` finds the `zh_hk` variant).
    fn i18n_msg(&self, locale: &str) -> Option<&'static str>
    where
        Self: Sized,
    {
        let entry = self.entry();
        entry
            .i18n
            .iter()
            .find(|(k, _)| *k == locale)
            .or_else(|| {
                let lower = locale.to_ascii_lowercase();
                entry.i18n.iter().find(|(k, _)| *k == lower)
            })
            .map(|(_, v)| *v)
    }

    /// Locale variant with fallback to the default message.
    fn localized_msg(&self, locale: &str) -> &'static str
    where
        Self: Sized,
    {
        self.i18n_msg(locale).unwrap_or_else(|| self.msg())
    }

    /// Resolve the message for `locale` and substitute `{key}` placeholders.
    /// Placeholders without a matching param are left literal.
    fn render(&self, locale: &str, params: &[(&str, &str)]) -> String
    where
        Self: Sized,
    {
        i18n::render(self.localized_msg(locale), params)
    }
}

/// Declare a code family: the enum, its static descriptor, and the
/// [`ErrorCode`] implementation backed by a once-built table.
macro_rules! code_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: prefix = $prefix:literal, style = $style:ident $(($width:literal))?, info = $info:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $local:literal => $msg:literal { $($lkey:literal => $lmsg:literal),* $(,)? }
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member of the family, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            fn descriptor() -> &'static $crate::codes::FamilyDescriptor {
                static DESCRIPTOR: $crate::codes::FamilyDescriptor = $crate::codes::FamilyDescriptor {
                    name: stringify!($name),
                    prefix: $prefix,
                    info: $info,
                    style: $crate::codes::CodeStyle::$style $(($width))?,
                    members: &[
                        $(
                            $crate::codes::MemberSpec {
                                name: stringify!($variant),
                                local: $local,
                                msg: $msg,
                                i18n: &[ $( ($lkey, $lmsg), )* ],
                            },
                        )+
                    ],
                };
                &DESCRIPTOR
            }
        }

        impl $crate::codes::ErrorCode for $name {
            fn family() -> &'static $crate::codes::FamilyTable {
                static TABLE: ::std::sync::OnceLock<$crate::codes::FamilyTable> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| $crate::codes::FamilyTable::build($name::descriptor()))
            }

            fn name(&self) -> &'static str {
                match self { $( $name::$variant => stringify!($variant), )+ }
            }

            fn local_code(&self) -> i64 {
                match self { $( $name::$variant => $local, )+ }
            }
        }
    };
}

pub(crate) use code_family;

/// All families shipped by this crate, for catalog dumps.
pub fn families() -> &'static [&'static FamilyTable] {
    static FAMILIES: std::sync::OnceLock<Vec<&'static FamilyTable>> = std::sync::OnceLock::new();
    FAMILIES.get_or_init(|| {
        vec![
            AuthCode::family(),
            TokenCode::family(),
            CommonCode::family(),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_style_concatenates_with_zero_pad() {
        assert_eq!(CodeStyle::Padded(2).full_code(4000, 1), 400001);
        assert_eq!(CodeStyle::Padded(2).full_code(4000, 10), 400010);
        assert_eq!(CodeStyle::Padded(2).full_code(100, 37), 10037);
        // Local codes wider than the pad concatenate unpadded.
        assert_eq!(CodeStyle::Padded(2).full_code(100, 101), 100101);
    }

    #[test]
    fn multiply_style() {
        assert_eq!(CodeStyle::Multiply.full_code(4000, 3), 400003);
    }

    #[test]
    fn family_codes_match_original_values() {
        assert_eq!(AuthCode::NeedLogin.code(), 400001);
        assert_eq!(AuthCode::NeedSelectTenant.code(), 400010);
        assert_eq!(TokenCode::InvalidToken.code(), 400001);
        assert_eq!(TokenCode::ExpiredToken.code(), 400002);
        assert_eq!(CommonCode::ParamError.code(), 10001);
        assert_eq!(CommonCode::ServerError.code(), 10037);
    }

    #[test]
    fn localized_lookup_falls_back_to_default() {
        assert_eq!(AuthCode::AuthError.localized_msg("en"), "No authority to access");
        assert_eq!(AuthCode::AuthError.localized_msg("zh_HK"), "無權訪問");
        // No Japanese variant declared: default (zh_CN) message.
        assert_eq!(AuthCode::AuthError.localized_msg("ja"), "无权访问");
    }

    #[test]
    fn render_substitutes_placeholders() {
        let msg = CommonCode::ParamsEmptyWithField.render("zh_CN", &[("field", "email")]);
        assert_eq!(msg, "字段（email）不能为空");

        // Missing params stay literal.
        let msg = CommonCode::ParamsEmptyWithField.render("zh_CN", &[]);
        assert_eq!(msg, "字段（{field}）不能为空");
    }

    #[test]
    fn family_table_builds_once() {
        let first = AuthCode::family() as *const FamilyTable;
        let second = AuthCode::family() as *const FamilyTable;
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_first_access_is_idempotent() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| TokenCode::family() as *const FamilyTable as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn export_carries_codes_and_i18n() {
        let export = TokenCode::family().export();
        assert_eq!(export.family, "TokenCode");
        assert_eq!(export.members.len(), 2);
        assert_eq!(export.members[0].code, 400001);
        assert_eq!(export.members[0].i18n_key, "code.common.400001");
        assert_eq!(export.members[0].i18n_msg["en"], "Invalid token, please log in");
    }

    #[test]
    fn families_lists_all_builtins() {
        let names: Vec<&str> = families().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["AuthCode", "TokenCode", "CommonCode"]);
    }
}
