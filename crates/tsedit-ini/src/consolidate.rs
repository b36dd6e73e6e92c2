//! In-place merge of one configuration into another

use crate::document::ParsedConfig;

/// Merge `secondary` into `primary`.
///
/// For each section of `secondary`, in order, the section of the same name is
/// looked up in `primary` (or appended empty at the end if missing), and every
/// key of the secondary section is inserted or overwritten in it.
///
/// The secondary value always wins on a key collision. Nothing is ever removed
/// from `primary`, and the order of its existing sections is unchanged.
/// Consolidating the same `secondary` twice gives the same result as once.
pub fn consolidate(primary: &mut ParsedConfig, secondary: &ParsedConfig) {
    for section in secondary {
        let target = primary.get_or_insert_section(section.name());
        for (key, value) in section.iter() {
            target.set(key, value);
        }
    }
}
