use crate::crypto::error::CipherError;
use std::fmt;
use std::str::FromStr;

/// Mode selected at runtime; see `crypto::modes` for the static markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    NoPadding,
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

impl CipherMode {
    pub const ALL: [CipherMode; 6] = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::PCBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
            CipherMode::PCBC => "PCBC",
            CipherMode::CFB => "CFB",
            CipherMode::OFB => "OFB",
            CipherMode::CTR => "CTR",
        }
    }

    /// Whether the mode carries feedback state initialised from an IV.
    pub fn uses_iv(self) -> bool {
        !matches!(self, CipherMode::ECB)
    }
}

impl PaddingMode {
    pub const ALL: [PaddingMode; 5] = [
        PaddingMode::NoPadding,
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaddingMode::NoPadding => "none",
            PaddingMode::Zeros => "zeros",
            PaddingMode::ANSI_X923 => "ansi-x923",
            PaddingMode::PKCS7 => "pkcs7",
            PaddingMode::ISO10126 => "iso10126",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CipherError::UnknownAlgorithm(s.to_string()))
    }
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "none" | "nopadding" | "no-padding" => Ok(PaddingMode::NoPadding),
            "zeros" | "zero" => Ok(PaddingMode::Zeros),
            "ansi-x923" | "ansix923" | "x923" => Ok(PaddingMode::ANSI_X923),
            "pkcs7" => Ok(PaddingMode::PKCS7),
            "iso10126" | "iso-10126" => Ok(PaddingMode::ISO10126),
            _ => Err(CipherError::UnknownAlgorithm(s.to_string())),
        }
    }
}
