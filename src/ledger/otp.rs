use rand::rngs::OsRng;
use rand::Rng;

pub const OTP_LENGTH: usize = 4;
const OTP_MIN: u32 = 1000;
const OTP_MAX: u32 = 9999;

/// Fresh 4-digit completion code from the OS random source
pub fn generate_otp() -> String {
    OsRng.gen_range(OTP_MIN..=OTP_MAX).to_string()
}

pub fn is_well_formed_otp(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}
