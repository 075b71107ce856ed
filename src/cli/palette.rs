use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::{read, resolve_path};
use crate::error::{Result, TintError};
use crate::output::{display_path, plural, Printer};
use crate::types::{HslTriplet, Palette};

/// Print the merged design-token palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Configuration file or project directory (default: current directory)
    pub config: Option<PathBuf>,

    /// Only print this scope (e.g. ":root" or ".dark")
    #[arg(long)]
    pub scope: Option<String>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let path = resolve_path(args.config.as_deref())?;
    let config = read(&path)?;
    let palette = config.palette();

    if let Some(selector) = &args.scope {
        if palette.scope(selector).is_none() {
            return Err(TintError::Command {
                message: format!("Scope '{}' is not defined", selector),
                help: Some(format!(
                    "Defined scopes: {}",
                    palette.scope_names().collect::<Vec<_>>().join(", ")
                )),
            });
        }
    }

    let total: usize = palette.scopes().map(|(_, scope)| scope.len()).sum();
    printer.status(
        "Merged",
        &format!(
            "{} from {}",
            plural(total, "token", "tokens"),
            display_path(&path)
        ),
    );

    let mut stdout = io::stdout().lock();
    write_palette(&mut stdout, &palette, args.scope.as_deref(), printer)?;
    Ok(())
}

/// Write one line per token: name, HSL value, and its hex equivalent.
///
/// Values that are not valid triplets are printed as-is.
fn write_palette(
    out: &mut impl Write,
    palette: &Palette,
    only: Option<&str>,
    printer: &Printer,
) -> io::Result<()> {
    for (selector, scope) in palette.scopes() {
        if only.is_some_and(|s| s != selector) {
            continue;
        }
        writeln!(out, "{}", printer.bold(selector))?;
        for (name, value) in scope.iter() {
            match HslTriplet::parse(value) {
                Ok(hsl) => {
                    let colour = hsl.to_colour();
                    writeln!(
                        out,
                        "  {}{:<24} {:<18} {}",
                        printer.swatch(colour),
                        name,
                        value,
                        printer.dim(&colour.to_string())
                    )?
                }
                Err(_) => writeln!(out, "  {:<24} {}", name, value)?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaletteScope, DARK_SCOPE, ROOT_SCOPE};

    fn palette() -> Palette {
        let mut palette = Palette::new();
        palette.insert_scope(
            ROOT_SCOPE,
            [("--background", "0 0% 100%"), ("--ring", "oops")]
                .into_iter()
                .collect::<PaletteScope>(),
        );
        palette.insert_scope(
            DARK_SCOPE,
            [("--background", "0 0% 0%")]
                .into_iter()
                .collect::<PaletteScope>(),
        );
        palette
    }

    fn render(only: Option<&str>) -> String {
        let mut out = Vec::new();
        write_palette(&mut out, &palette(), only, &Printer::plain()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_palette() {
        let text = render(None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ":root");
        assert!(lines[1].contains("--background"));
        assert!(lines[1].ends_with("#FFFFFF"));
        assert!(lines[2].ends_with("oops"));
        assert_eq!(lines[3], ".dark");
        assert!(lines[4].ends_with("#000000"));
    }

    #[test]
    fn test_write_palette_single_scope() {
        let text = render(Some(DARK_SCOPE));
        assert!(text.starts_with(".dark\n"));
        assert!(!text.contains(":root"));
    }
}
