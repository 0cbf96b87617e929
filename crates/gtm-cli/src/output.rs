use gtm_core::options::OptionEntry;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write as _;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// One payload field and the values it accepts.
pub struct OptionGroup<'a> {
    pub field: &'a str,
    pub default: Option<&'a str>,
    pub entries: &'a [OptionEntry],
}

/// Render option groups as indented `value  label` blocks. Values are
/// aligned across all groups; widths count chars so labels like
/// "Lean (scrappy, <$10k/month)" and non-ASCII text line up.
pub fn format_option_groups(groups: &[OptionGroup]) -> String {
    let width = groups
        .iter()
        .flat_map(|g| g.entries.iter())
        .map(|e| e.value.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match group.default {
            Some(d) => {
                let _ = writeln!(out, "{} (default: {d})", group.field);
            }
            None => {
                let _ = writeln!(out, "{}", group.field);
            }
        }
        for entry in group.entries {
            let _ = writeln!(out, "  {:width$}  {}", entry.value, entry.label, width = width);
        }
    }
    out
}

pub fn print_option_groups(groups: &[OptionGroup]) {
    print!("{}", format_option_groups(groups));
}
