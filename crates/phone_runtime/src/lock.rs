//! Lock controller: passcode entry buffer and locked/unlocked transitions.

use std::time::Duration;

/// Demo passcode.
///
/// This is a fixed placeholder for a portfolio lock screen and protects nothing; it is shown on
/// the lock screen hint and must not be mistaken for an authentication mechanism.
pub const PASSCODE: &str = "1234";
/// Digits collected before a validation attempt.
pub const PASSCODE_LENGTH: usize = 4;
/// How long the failed-attempt flag stays raised for the shake animation.
pub const FAILED_ATTEMPT_DISPLAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of feeding input to the [`LockState`].
pub enum LockOutcome {
    /// Input was not applicable (already unlocked, non-digit, empty buffer).
    Ignored,
    /// Digit accepted; more are needed.
    Pending,
    /// Passcode matched; the shell is unlocked.
    Unlocked,
    /// Passcode did not match. `attempt` identifies this failure for the delayed flag reset.
    Rejected {
        /// Sequence number of the failed attempt.
        attempt: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lock-screen state. `entered_digits` never exceeds [`PASSCODE_LENGTH`].
pub struct LockState {
    is_locked: bool,
    entered_digits: String,
    last_attempt_failed: bool,
    failed_attempts: u64,
}

impl Default for LockState {
    fn default() -> Self {
        Self::initialize(false)
    }
}

impl LockState {
    /// Initial state at shell mount.
    pub fn initialize(skip_lock: bool) -> Self {
        Self {
            is_locked: !skip_lock,
            entered_digits: String::new(),
            last_attempt_failed: false,
            failed_attempts: 0,
        }
    }

    /// Whether the lock screen covers the shell.
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// Digits typed so far.
    pub fn entered_digits(&self) -> &str {
        &self.entered_digits
    }

    /// Whether the shake/failure indicator is raised.
    pub fn last_attempt_failed(&self) -> bool {
        self.last_attempt_failed
    }

    /// Appends a digit and validates once the buffer is full.
    pub fn submit_digit(&mut self, digit: char) -> LockOutcome {
        if !self.is_locked || !digit.is_ascii_digit() {
            return LockOutcome::Ignored;
        }
        self.entered_digits.push(digit);
        if self.entered_digits.len() == PASSCODE_LENGTH {
            self.validate()
        } else {
            LockOutcome::Pending
        }
    }

    /// Removes the most recent digit.
    pub fn delete_digit(&mut self) -> LockOutcome {
        if !self.is_locked || self.entered_digits.pop().is_none() {
            return LockOutcome::Ignored;
        }
        LockOutcome::Pending
    }

    /// Compares the buffer against [`PASSCODE`]. The buffer is cleared either way.
    pub fn validate(&mut self) -> LockOutcome {
        if !self.is_locked {
            return LockOutcome::Ignored;
        }
        let matched = self.entered_digits == PASSCODE;
        self.entered_digits.clear();
        if matched {
            self.is_locked = false;
            self.last_attempt_failed = false;
            LockOutcome::Unlocked
        } else {
            self.failed_attempts += 1;
            self.last_attempt_failed = true;
            LockOutcome::Rejected {
                attempt: self.failed_attempts,
            }
        }
    }

    /// Lowers the failure flag raised by `attempt`. Stale resets from earlier failures are ignored.
    pub fn clear_failure(&mut self, attempt: u64) -> bool {
        if !self.last_attempt_failed || attempt != self.failed_attempts {
            return false;
        }
        self.last_attempt_failed = false;
        true
    }

    /// Locks the shell unless the user opted out of the lock screen.
    pub fn lock(&mut self, skip_lock_enabled: bool) -> bool {
        if skip_lock_enabled || self.is_locked {
            return false;
        }
        self.is_locked = true;
        self.entered_digits.clear();
        self.last_attempt_failed = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(state: &mut LockState, digits: &str) -> LockOutcome {
        let mut outcome = LockOutcome::Ignored;
        for digit in digits.chars() {
            outcome = state.submit_digit(digit);
        }
        outcome
    }

    #[test]
    fn initialize_respects_skip_lock() {
        assert!(LockState::initialize(false).is_locked());
        assert!(!LockState::initialize(true).is_locked());
    }

    #[test]
    fn correct_passcode_unlocks_and_clears_buffer() {
        let mut state = LockState::initialize(false);
        assert_eq!(state.submit_digit('1'), LockOutcome::Pending);
        assert_eq!(state.entered_digits(), "1");
        assert_eq!(enter(&mut state, "234"), LockOutcome::Unlocked);
        assert!(!state.is_locked());
        assert_eq!(state.entered_digits(), "");
        assert!(!state.last_attempt_failed());
    }

    #[test]
    fn wrong_passcode_stays_locked_and_raises_failure() {
        let mut state = LockState::initialize(false);
        assert_eq!(enter(&mut state, "9999"), LockOutcome::Rejected { attempt: 1 });
        assert!(state.is_locked());
        assert_eq!(state.entered_digits(), "");
        assert!(state.last_attempt_failed());
    }

    #[test]
    fn buffer_never_exceeds_passcode_length() {
        let mut state = LockState::initialize(false);
        for digit in "98765432".chars() {
            state.submit_digit(digit);
            assert!(state.entered_digits().len() < PASSCODE_LENGTH);
        }
    }

    #[test]
    fn digits_are_ignored_while_unlocked_or_not_numeric() {
        let mut state = LockState::initialize(true);
        assert_eq!(state.submit_digit('1'), LockOutcome::Ignored);
        assert_eq!(state.entered_digits(), "");

        let mut locked = LockState::initialize(false);
        assert_eq!(locked.submit_digit('x'), LockOutcome::Ignored);
        assert_eq!(locked.entered_digits(), "");
    }

    #[test]
    fn stale_failure_reset_does_not_clear_newer_failure() {
        let mut state = LockState::initialize(false);
        let LockOutcome::Rejected { attempt: first } = enter(&mut state, "0000") else {
            panic!("expected rejection");
        };
        let LockOutcome::Rejected { attempt: second } = enter(&mut state, "1111") else {
            panic!("expected rejection");
        };

        assert!(!state.clear_failure(first));
        assert!(state.last_attempt_failed());
        assert!(state.clear_failure(second));
        assert!(!state.last_attempt_failed());
    }

    #[test]
    fn delete_digit_pops_last_entry() {
        let mut state = LockState::initialize(false);
        enter(&mut state, "12");
        assert_eq!(state.delete_digit(), LockOutcome::Pending);
        assert_eq!(state.entered_digits(), "1");
        state.delete_digit();
        assert_eq!(state.delete_digit(), LockOutcome::Ignored);
    }

    #[test]
    fn lock_is_a_no_op_when_skip_lock_is_enabled() {
        let mut state = LockState::initialize(true);
        assert!(!state.lock(true));
        assert!(!state.is_locked());
        assert!(state.lock(false));
        assert!(state.is_locked());
    }

    #[test]
    fn failure_flag_is_shown_for_one_second() {
        assert_eq!(FAILED_ATTEMPT_DISPLAY, Duration::from_secs(1));
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn buffer_stays_short_and_unlocks_only_on_a_matching_group(digits in "[0-9]{0,40}") {
                let mut state = LockState::initialize(false);
                for digit in digits.chars() {
                    state.submit_digit(digit);
                    prop_assert!(state.entered_digits().len() < PASSCODE_LENGTH);
                }
                let matched = digits
                    .as_bytes()
                    .chunks_exact(PASSCODE_LENGTH)
                    .any(|group| group == PASSCODE.as_bytes());
                prop_assert_eq!(!state.is_locked(), matched);
            }

            #[test]
            fn non_digit_input_never_changes_state(input in "[^0-9]{0,20}") {
                let mut state = LockState::initialize(false);
                let before = state.clone();
                for key in input.chars() {
                    prop_assert_eq!(state.submit_digit(key), LockOutcome::Ignored);
                }
                prop_assert_eq!(state, before);
            }
        }
    }
}
