use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::{ReflectError, Result};
use crate::utils::bits::{mask_within, reverse_within, width_mask};
use crate::utils::table::reflect_byte;

/// Reflection settings of a CRC parameter set.
///
/// Carries the register `width` together with the RefIn and RefOut flags.
/// A checksum engine uses [`ReflectConfig::reflect_input_byte`] on every
/// input byte and [`ReflectConfig::reflect_output_value`] on the final
/// register, before the output XOR.
///
/// Settings can also be read from `key = value` text:
///
/// ```rust
/// use bitreflect::ReflectConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config: ReflectConfig = r#"
/// width = 16
/// refin = true
/// refout = true
/// "#.parse()?;
///
/// assert_eq!(config, ReflectConfig::CRC16_ARC);
/// assert_eq!(config.reflect_input_byte(0x01), 0x80);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReflectConfig {
    width: u32,
    reflect_input: bool,
    reflect_output: bool,
}

impl ReflectConfig {
    /// CRC-8/SMBUS: no reflection.
    pub const CRC8_SMBUS: ReflectConfig = ReflectConfig::preset(8, false, false);
    /// CRC-16/ARC: reflected input and output.
    pub const CRC16_ARC: ReflectConfig = ReflectConfig::preset(16, true, true);
    /// CRC-16/XMODEM: no reflection.
    pub const CRC16_XMODEM: ReflectConfig = ReflectConfig::preset(16, false, false);
    /// CRC-32/ISO-HDLC (ZIP, GZIP, PNG): reflected input and output.
    pub const CRC32_ISO_HDLC: ReflectConfig = ReflectConfig::preset(32, true, true);
    /// CRC-32/ISCSI (CRC-32C): reflected input and output.
    pub const CRC32_ISCSI: ReflectConfig = ReflectConfig::preset(32, true, true);
    /// CRC-32/MPEG-2 (MPEG-TS PSI tables): no reflection.
    pub const CRC32_MPEG2: ReflectConfig = ReflectConfig::preset(32, false, false);
    /// CRC-64/XZ: reflected input and output.
    pub const CRC64_XZ: ReflectConfig = ReflectConfig::preset(64, true, true);

    const fn preset(width: u32, reflect_input: bool, reflect_output: bool) -> Self {
        ReflectConfig {
            width,
            reflect_input,
            reflect_output,
        }
    }

    /// Creates a config, checking that `width` is between 1 and 64.
    pub fn new(width: u32, reflect_input: bool, reflect_output: bool) -> Result<Self> {
        width_mask(width)?;
        Ok(Self::preset(width, reflect_input, reflect_output))
    }

    /// Looks up a preset by its catalogue name, ignoring case.
    ///
    /// Accepts e.g. `CRC-32/ISO-HDLC`, `crc-16/arc` or `CRC-64/XZ`.
    pub fn from_name(name: &str) -> Option<Self> {
        let preset = match name.trim().to_ascii_uppercase().as_str() {
            "CRC-8/SMBUS" | "CRC-8" => Self::CRC8_SMBUS,
            "CRC-16/ARC" => Self::CRC16_ARC,
            "CRC-16/XMODEM" => Self::CRC16_XMODEM,
            "CRC-32/ISO-HDLC" | "CRC-32" => Self::CRC32_ISO_HDLC,
            "CRC-32/ISCSI" | "CRC-32C" => Self::CRC32_ISCSI,
            "CRC-32/MPEG-2" => Self::CRC32_MPEG2,
            "CRC-64/XZ" => Self::CRC64_XZ,
            _ => return None,
        };
        Some(preset)
    }

    /// Register width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether input bytes are reflected (RefIn).
    pub fn reflect_input(&self) -> bool {
        self.reflect_input
    }

    /// Whether the final register is reflected (RefOut).
    pub fn reflect_output(&self) -> bool {
        self.reflect_output
    }

    /// Applies RefIn to a single input byte.
    pub fn reflect_input_byte(&self, byte: u8) -> u8 {
        if self.reflect_input {
            reflect_byte(byte)
        } else {
            byte
        }
    }

    /// Applies RefOut to a register value.
    ///
    /// The register is first masked to `width` bits, so stray high bits never
    /// reach the result whether or not RefOut is set.
    pub fn reflect_output_value(&self, register: u64) -> u64 {
        let masked = register & mask_within(self.width);
        if self.reflect_output {
            reverse_within(masked, self.width)
        } else {
            masked
        }
    }

    /// Parses settings from `key = value` lines.
    ///
    /// Recognized keys are `preset`, `width`, `refin` and `refout`
    /// (`reflect_input`/`reflect_output` are accepted as aliases). Blank lines
    /// and lines starting with `#` are skipped, values may be quoted, and later
    /// lines override earlier ones, so a `preset` can be adjusted afterwards.
    /// Widths may be decimal or `0x` hex. `width` is required unless a preset
    /// is given.
    pub fn parse(content: &str) -> Result<Self> {
        let mut width = None;
        let mut reflect_input = false;
        let mut reflect_output = false;

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                ReflectError::InvalidConfig(format!(
                    "line {}: expected `key = value`, got `{}`",
                    line_no + 1,
                    line
                ))
            })?;
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().trim_matches('"').trim_matches('\'');

            match key.as_str() {
                "preset" => {
                    let preset = Self::from_name(value).ok_or_else(|| {
                        ReflectError::InvalidConfig(format!("unknown preset `{}`", value))
                    })?;
                    width = Some(preset.width);
                    reflect_input = preset.reflect_input;
                    reflect_output = preset.reflect_output;
                }
                "width" => width = Some(parse_width(value)?),
                "refin" | "reflect_input" => reflect_input = value.parse()?,
                "refout" | "reflect_output" => reflect_output = value.parse()?,
                _ => {
                    warn!("Ignoring unknown reflection setting `{}`", key);
                    continue;
                }
            }
            debug!("Reflection setting {} = {}", key, value);
        }

        let width = width.ok_or_else(|| ReflectError::InvalidConfig("missing `width`".into()))?;
        Self::new(width, reflect_input, reflect_output)
    }

    /// Reads and parses a settings file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading reflection settings from {}", path.as_ref().display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

fn parse_width(value: &str) -> Result<u32> {
    let width = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16)?,
        None => value.parse()?,
    };
    Ok(width)
}

impl FromStr for ReflectConfig {
    type Err = ReflectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders the settings as `key = value` lines that [`ReflectConfig::parse`]
/// reads back. There is no newline after the last line.
impl fmt::Display for ReflectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "width = {}", self.width)?;
        writeln!(f, "refin = {}", self.reflect_input)?;
        write!(f, "refout = {}", self.reflect_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_validates_width() {
        let config = ReflectConfig::new(12, true, false).unwrap();
        assert_eq!(config.width(), 12);
        assert!(config.reflect_input());
        assert!(!config.reflect_output());

        assert!(matches!(
            ReflectConfig::new(0, true, true),
            Err(ReflectError::InvalidWidth { width: 0, max: 64 })
        ));
        assert!(ReflectConfig::new(65, false, false).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            ReflectConfig::from_name("crc-32/iso-hdlc"),
            Some(ReflectConfig::CRC32_ISO_HDLC)
        );
        assert_eq!(
            ReflectConfig::from_name(" CRC-32/MPEG-2 "),
            Some(ReflectConfig::CRC32_MPEG2)
        );
        assert_eq!(ReflectConfig::from_name("CRC-64/XZ").unwrap().width(), 64);
        assert_eq!(ReflectConfig::from_name("CRC-99/NOPE"), None);
    }

    #[test]
    fn test_reflect_input_byte() {
        assert_eq!(ReflectConfig::CRC32_ISO_HDLC.reflect_input_byte(0x31), 0x8C);
        assert_eq!(ReflectConfig::CRC32_MPEG2.reflect_input_byte(0x31), 0x31);
    }

    #[test]
    fn test_reflect_output_value() {
        let arc = ReflectConfig::CRC16_ARC;
        assert_eq!(arc.reflect_output_value(0x0001), 0x8000);
        // High bits beyond the register are dropped
        assert_eq!(arc.reflect_output_value(0xFFFF_0001), 0x8000);

        let xmodem = ReflectConfig::CRC16_XMODEM;
        assert_eq!(xmodem.reflect_output_value(0xFFFF_1234), 0x1234);

        let xz = ReflectConfig::CRC64_XZ;
        assert_eq!(xz.reflect_output_value(1), 1 << 63);

        let odd = ReflectConfig::new(5, false, true).unwrap();
        assert_eq!(odd.reflect_output_value(0b1110_0011), 0b11000);
    }

    #[test]
    fn test_parse() {
        let config = ReflectConfig::parse(
            "# CRC-32C\nwidth = 0x20\nrefin = \"true\"\n\nrefout = 'true'\n",
        )
        .unwrap();
        assert_eq!(config, ReflectConfig::CRC32_ISCSI);

        let config: ReflectConfig = "reflect_input = true\nWIDTH = 7".parse().unwrap();
        assert_eq!(config, ReflectConfig::new(7, true, false).unwrap());
    }

    #[test]
    fn test_parse_preset_then_override() {
        let config = ReflectConfig::parse("preset = CRC-16/ARC\nrefout = false").unwrap();
        assert_eq!(config.width(), 16);
        assert!(config.reflect_input());
        assert!(!config.reflect_output());
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let config = ReflectConfig::parse("width = 8\npoly = 0x07\nxorout = 0").unwrap();
        assert_eq!(config, ReflectConfig::CRC8_SMBUS);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ReflectConfig::parse("refin = true"),
            Err(ReflectError::InvalidConfig(_))
        ));
        assert!(matches!(
            ReflectConfig::parse("width 32"),
            Err(ReflectError::InvalidConfig(_))
        ));
        assert!(matches!(
            ReflectConfig::parse("width = thirty-two"),
            Err(ReflectError::ParseInt(_))
        ));
        assert!(matches!(
            ReflectConfig::parse("width = 0x1G"),
            Err(ReflectError::ParseInt(_))
        ));
        assert!(matches!(
            ReflectConfig::parse("width = 8\nrefin = yes"),
            Err(ReflectError::ParseBool(_))
        ));
        assert!(matches!(
            ReflectConfig::parse("width = 128"),
            Err(ReflectError::InvalidWidth { width: 128, max: 64 })
        ));
        assert!(matches!(
            ReflectConfig::parse("preset = CRC-7/NOPE"),
            Err(ReflectError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let config = ReflectConfig::new(24, true, false).unwrap();
        let text = config.to_string();
        assert_eq!(text, "width = 24\nrefin = true\nrefout = false");
        assert!(!text.ends_with('\n'));
        assert_eq!(ReflectConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_load() {
        let path = std::env::temp_dir().join(format!(
            "bitreflect_config_test_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "preset = \"CRC-64/XZ\"\n").unwrap();
        let config = ReflectConfig::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config.unwrap(), ReflectConfig::CRC64_XZ);

        let missing = std::env::temp_dir().join("bitreflect_config_test_missing.toml");
        assert!(matches!(ReflectConfig::load(&missing), Err(ReflectError::Io(_))));
    }
}
