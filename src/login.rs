//! Mobile-number entry for the login screen.
//!
//! Sending the one-time password is not wired to anything; the action only
//! leaves a trace in the log.
use log::info;

/// Number of digits in a mobile number.
pub const PHONE_DIGITS: usize = 10;

/// Digit-only text field capped at [`PHONE_DIGITS`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneInput
{
    /// Entered digits
    digits: String,
}

impl PhoneInput
{
    /// Creates an empty field.
    #[must_use]
    pub const fn new() -> Self
    {
        Self {
            digits: String::new(),
        }
    }

    /// Appends `ch` if it is an ASCII digit and the field is not full.
    ///
    /// # Returns
    ///
    /// `true` if the character was accepted.
    pub fn push(&mut self, ch: char) -> bool
    {
        if !ch.is_ascii_digit() || self.is_complete()
        {
            return false;
        }
        self.digits.push(ch);
        true
    }

    /// Removes the last digit.
    pub fn pop(&mut self)
    {
        self.digits.pop();
    }

    /// The digits entered so far.
    #[must_use]
    pub fn digits(&self) -> &str
    {
        &self.digits
    }

    /// Returns `true` once all [`PHONE_DIGITS`] digits are entered.
    #[must_use]
    pub fn is_complete(&self) -> bool
    {
        self.digits.len() >= PHONE_DIGITS
    }

    /// Requests a one-time password for the entered number.
    ///
    /// There is no dispatcher, so this does nothing beyond logging.
    pub fn send_otp(&self)
    {
        info!(
            "Send OTP pressed with {} of {PHONE_DIGITS} digits, no dispatcher configured",
            self.digits.len()
        );
    }
}
