//! Welcome banner: "NUMEROLOGY" in figlet's standard font with a gold-to-violet gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};
use tracing::debug;

/// Antique gold (#d4a017).
const GOLD: (u8, u8, u8) = (0xd4, 0xa0, 0x17);
/// Deep violet (#7f00ff).
const VIOLET: (u8, u8, u8) = (0x7f, 0x00, 0xff);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn banner_art() -> Option<String> {
    let font = FIGfont::standard()
        .map_err(|e| debug!(error = %e, "figlet font unavailable"))
        .ok()?;
    font.convert("NUMEROLOGY").map(|figure| figure.to_string())
}

/// Prints the banner, then version and tagline. Falls back to a plain title line
/// when the figlet font cannot be loaded.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art().unwrap_or_else(|| "NUMEROLOGY".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(GOLD, VIOLET, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: GOLD.0,
        g: GOLD.1,
        b: GOLD.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Pythagorean numerology profile\r\n\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(GOLD, VIOLET, 0.0), GOLD);
        assert_eq!(lerp_rgb(GOLD, VIOLET, 1.0), VIOLET);
        assert_eq!(lerp_rgb((0, 0, 0), (200, 100, 50), 0.5), (100, 50, 25));
    }
}
