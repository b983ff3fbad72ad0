use super::error::BookingError;
use super::types::Booking;
use crate::normalize::normalize_email;

/// Normalizes and validates a booking before it is written.
///
/// The email is trimmed and lowercased. On error the booking is left untouched.
pub fn prepare_booking(booking: &mut Booking) -> Result<(), BookingError> {
    booking.email = normalize_email(&booking.email)?;
    Ok(())
}

/// Returns true if the referenced event must be looked up before writing.
///
/// That is the case for new bookings and whenever `event_id` differs from the
/// persisted value. An untouched reference is not re-checked.
pub fn requires_event_check(booking: &Booking, persisted: Option<&Booking>) -> bool {
    persisted.is_none_or(|stored| stored.event_id != booking.event_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizeError;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_prepare_booking_lowercases_email() {
        let mut booking = Booking::new(Uuid::new_v4(), " Grace@Hopper.DEV ", Utc::now());

        prepare_booking(&mut booking).unwrap();

        assert_eq!(booking.email, "grace@hopper.dev");
    }

    #[test]
    fn test_prepare_booking_rejects_invalid_email() {
        let mut booking = Booking::new(Uuid::new_v4(), "not-an-email", Utc::now());

        let result = prepare_booking(&mut booking);

        assert_eq!(
            result,
            Err(BookingError::Normalize(NormalizeError::InvalidEmail(
                "not-an-email".to_string()
            )))
        );
        assert_eq!(booking.email, "not-an-email");
    }

    #[test]
    fn test_new_booking_requires_event_check() {
        let booking = Booking::new(Uuid::new_v4(), "a@b.io", Utc::now());
        assert!(requires_event_check(&booking, None));
    }

    #[test]
    fn test_untouched_reference_skips_event_check() {
        let stored = Booking::new(Uuid::new_v4(), "a@b.io", Utc::now());
        let mut booking = stored.clone();
        booking.email = "c@d.io".to_string();

        assert!(!requires_event_check(&booking, Some(&stored)));
    }

    #[test]
    fn test_changed_reference_requires_event_check() {
        let stored = Booking::new(Uuid::new_v4(), "a@b.io", Utc::now());
        let mut booking = stored.clone();
        booking.event_id = Uuid::new_v4();

        assert!(requires_event_check(&booking, Some(&stored)));
    }
}
