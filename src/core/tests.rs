#[cfg(test)]
mod tests {
    use crate::core::{
        Accordion, ContactFormState, ContactGateway, ContactRequest, CounterAnimation, FAQS,
        Lightbox, NotificationKind, NotificationSlot, OneShot, STATS, SectionBounds,
        SubmitError, SubmitPhase, active_section, is_scrolled,
    };
    use crate::core::validation::{ContactError, ContactField};
    use futures::executor::block_on;

    struct AcceptingGateway;

    impl ContactGateway for AcceptingGateway {
        async fn submit(&self, _request: ContactRequest) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    fn state_with(name: &str, email: &str, phone: &str, consent: bool) -> ContactFormState {
        let mut state = ContactFormState::new();
        state.set_name(name.to_string());
        state.set_email(email.to_string());
        state.set_phone(phone.to_string());
        state.set_consent(consent);
        state
    }

    #[test]
    fn test_scrolled_flag_follows_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn test_faq_accordion_over_real_entries() {
        let mut accordion = Accordion::new();
        for index in 0..FAQS.len() {
            accordion.toggle(index);
            let open = (0..FAQS.len()).filter(|&i| accordion.is_open(i)).count();
            assert_eq!(open, 1);
        }
        accordion.toggle(FAQS.len() - 1);
        assert!((0..FAQS.len()).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn test_counters_run_once_per_stat() {
        for stat in STATS {
            let mut trigger = OneShot::new();
            let mut runs = Vec::new();

            // the stat enters the viewport three times
            for _ in 0..3 {
                if trigger.fire() {
                    runs.push(CounterAnimation::new(stat.target).frames());
                }
            }

            assert_eq!(runs.len(), 1);
            let frames = &runs[0];
            assert!(frames.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(frames.last(), Some(&stat.target));
        }
    }

    #[test]
    fn test_short_name_is_rejected_without_notification() {
        let mut state = state_with("Jo", "jan@email.pl", "123456789", true);
        let mut notifications = NotificationSlot::new();

        assert!(state.begin_submit().is_none());
        assert_eq!(state.errors.len(), 1);
        assert_eq!(
            state.errors.get(ContactField::Name),
            Some(&ContactError::NameTooShort)
        );
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(notifications.current().is_none());

        // nothing else touches the slot on a rejected submit
        assert!(!notifications.remove(0));
    }

    #[test]
    fn test_bad_email_is_the_only_error() {
        let mut state = state_with("Jan Kowalski", "bad-email", "123456789", true);

        assert!(state.begin_submit().is_none());
        let errors: Vec<_> = state.errors.iter().cloned().collect();
        assert_eq!(errors, vec![ContactError::InvalidEmail]);
        assert_eq!(
            state.errors.message(ContactField::Email).as_deref(),
            Some("Podaj poprawny adres email")
        );
    }

    #[test]
    fn test_valid_submission_end_to_end() {
        let mut state = state_with("Jan Kowalski", "jan@email.pl", "123 456 789", true);
        let mut notifications = NotificationSlot::new();

        let request = state.begin_submit().expect("valid form");
        assert!(state.phase.is_disabled());
        assert_eq!(state.phase.label(), "Wysyłanie...");

        let outcome = state.finish_submit(block_on(AcceptingGateway.submit(request)));
        let id = notifications.show(outcome.kind, outcome.message);

        let shown = notifications.current().unwrap();
        assert_eq!(shown.id, id);
        assert_eq!(shown.kind, NotificationKind::Success);
        assert!(state.form.name.is_empty());
        assert!(state.form.email.is_empty());
        assert!(state.form.phone.is_empty());
        assert!(!state.form.consent);
        assert_eq!(state.phase.label(), "Wyślij zapytanie");
    }

    #[test]
    fn test_lightbox_escape_restores_scrolling() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0);
        assert_eq!(lightbox.body_overflow(), "hidden");
        assert!(lightbox.handle_key("Escape"));
        assert_eq!(lightbox.body_overflow(), "");
    }

    #[test]
    fn test_highlighter_over_overlapping_sections() {
        let sections = vec![
            SectionBounds::new("home", 0.0, 900.0),
            SectionBounds::new("about", 850.0, 700.0),
        ];
        // 760 is inside home [-100, 800) and about [750, 1450)
        assert_eq!(active_section(760.0, &sections), Some("about"));
    }
}
