use chrono::{Local, NaiveDate};
use log::{debug, info};
use thiserror::Error;

use crate::config;

const ISO_DATE: &str = "%Y-%m-%d";
const PT_BR_DATE: &str = "%d/%m/%Y";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cannot select a date while the schedule modal is closed")]
    Closed,
    #[error("'{0}' is not a YYYY-MM-DD date")]
    Malformed(String),
    #[error("{date} is earlier than the first selectable day {min}")]
    BeforeMinimum { date: NaiveDate, min: NaiveDate },
}

/// Modal state. A date can only exist while the modal is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScheduleState {
    #[default]
    Closed,
    Open { date: Option<NaiveDate> },
}

/// Whatever can open an outbound link in a new browsing context.
/// Opening is fire-and-forget; failures are not reported back.
pub trait LinkOpener {
    fn open_link(&self, url: &str);
}

/// Drives the "Agendar demonstração" modal. The state is private so every
/// change goes through one of the transitions below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleComposer {
    state: ScheduleState,
}

impl ScheduleComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScheduleState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ScheduleState::Open { .. })
    }

    /// The selected day as `YYYY-MM-DD`, or an empty string.
    pub fn selected_date(&self) -> String {
        match self.state {
            ScheduleState::Open { date: Some(date) } => date.format(ISO_DATE).to_string(),
            _ => String::new(),
        }
    }

    pub fn open(&mut self) {
        if let ScheduleState::Closed = self.state {
            debug!("Opening schedule modal");
            self.state = ScheduleState::Open { date: None };
        }
    }

    /// Stores `candidate` as the selected day. An empty candidate clears the
    /// selection, which is what a date input reports when it is emptied.
    pub fn select_date(&mut self, candidate: &str, today: NaiveDate) -> Result<(), ScheduleError> {
        if !self.is_open() {
            return Err(ScheduleError::Closed);
        }
        let candidate = candidate.trim();
        if candidate.is_empty() {
            self.state = ScheduleState::Open { date: None };
            return Ok(());
        }
        let date = NaiveDate::parse_from_str(candidate, ISO_DATE)
            .map_err(|_| ScheduleError::Malformed(candidate.to_string()))?;
        if date < today {
            return Err(ScheduleError::BeforeMinimum { date, min: today });
        }
        self.state = ScheduleState::Open { date: Some(date) };
        Ok(())
    }

    /// Builds the outbound link for the selected day, hands it to `host` and
    /// closes the modal. Does nothing unless a day has been selected.
    pub fn confirm<H: LinkOpener + ?Sized>(&mut self, host: &H) -> Option<String> {
        let ScheduleState::Open { date: Some(date) } = self.state else {
            debug!("Ignoring confirm without a selected date");
            return None;
        };
        let link = build_outbound_link(Some(&compose_message(date)));
        info!("Opening WhatsApp for a demo on {}", date);
        host.open_link(&link);
        self.state = ScheduleState::Closed;
        Some(link)
    }

    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("Schedule modal dismissed");
        }
        self.state = ScheduleState::Closed;
    }
}

/// Renders a `YYYY-MM-DD` string as `DD/MM/YYYY`. Anything that does not
/// look like a date comes back unchanged.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let mut parts = raw.split('-').map(|part| part.trim().parse::<u32>().ok());
    let (Some(Some(year)), Some(Some(month)), Some(Some(day))) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_string();
    };
    if year == 0 || month == 0 || day == 0 {
        return raw.to_string();
    }
    match i32::try_from(year).ok().and_then(|year| NaiveDate::from_ymd_opt(year, month, day)) {
        Some(date) => date.format(PT_BR_DATE).to_string(),
        None => raw.to_string(),
    }
}

/// `https://wa.me/<number>`, with `?text=` carrying the encoded message when
/// there is one.
pub fn build_outbound_link(message: Option<&str>) -> String {
    let base = config::whatsapp_base_link();
    match message {
        Some(message) if !message.is_empty() => {
            format!("{}?text={}", base, urlencoding::encode(message))
        }
        _ => base,
    }
}

pub fn compose_message(date: NaiveDate) -> String {
    config::SCHEDULE_MESSAGE_TEMPLATE.replace("{date}", &display_date(date))
}

/// Short version of the message shown under the date input.
pub fn message_preview(date: NaiveDate) -> String {
    config::SCHEDULE_PREVIEW_TEMPLATE.replace("{date}", &display_date(date))
}

fn display_date(date: NaiveDate) -> String {
    format_date(&date.format(ISO_DATE).to_string())
}

/// Value for the date input's `min` attribute.
pub fn min_date(today: NaiveDate) -> String {
    today.format(ISO_DATE).to_string()
}

/// Today in the visitor's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_link(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, ISO_DATE).unwrap()
    }

    fn decoded_text(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").expect("link has a text parameter");
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn formats_iso_dates_as_pt_br() {
        assert_eq!(format_date("2026-03-05"), "05/03/2026");
        assert_eq!(format_date("2026-12-31"), "31/12/2026");
    }

    #[test]
    fn format_falls_back_to_raw_input() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date("2026-00-10"), "2026-00-10");
        assert_eq!(format_date("2026-03"), "2026-03");
        assert_eq!(format_date("2026-13-01"), "2026-13-01");
    }

    #[test]
    fn bare_link_without_message() {
        assert_eq!(build_outbound_link(None), "https://wa.me/5549991850177");
        assert_eq!(build_outbound_link(Some("")), "https://wa.me/5549991850177");
    }

    #[test]
    fn link_is_pure() {
        let message = "Olá, mundo";
        assert_eq!(build_outbound_link(Some(message)), build_outbound_link(Some(message)));
    }

    #[test]
    fn text_parameter_decodes_back_to_message() {
        let message = "Preço & prazo = 10 dias? Sim/não #1 ação";
        let link = build_outbound_link(Some(message));
        assert!(link.starts_with("https://wa.me/5549991850177?text="));
        assert!(!link.contains(' '));
        assert!(!link[link.find("?text=").unwrap() + 6..].contains('&'));
        assert_eq!(decoded_text(&link), message);
    }

    #[test]
    fn state_machine_happy_path() {
        let today = day("2026-01-01");
        let host = RecordingOpener::default();
        let mut composer = ScheduleComposer::new();
        assert!(!composer.is_open());

        composer.open();
        assert!(composer.is_open());
        assert_eq!(composer.selected_date(), "");

        composer.select_date("2026-03-05", today).unwrap();
        assert!(composer.is_open());
        assert_eq!(composer.selected_date(), "2026-03-05");

        let link = composer.confirm(&host).expect("confirm produces a link");
        assert!(decoded_text(&link).contains("05/03/2026"));
        assert!(!composer.is_open());
        assert_eq!(composer.selected_date(), "");
        assert_eq!(*host.opened.borrow(), vec![link]);
    }

    #[test]
    fn confirm_without_date_is_a_no_op() {
        let host = RecordingOpener::default();
        let mut composer = ScheduleComposer::new();
        composer.open();
        assert_eq!(composer.confirm(&host), None);
        assert_eq!(composer.state(), ScheduleState::Open { date: None });
        assert!(host.opened.borrow().is_empty());

        let mut closed = ScheduleComposer::new();
        assert_eq!(closed.confirm(&host), None);
        assert_eq!(closed.state(), ScheduleState::Closed);
    }

    #[test]
    fn reselecting_overwrites_and_empty_clears() {
        let today = day("2026-01-01");
        let mut composer = ScheduleComposer::new();
        composer.open();
        composer.select_date("2026-02-01", today).unwrap();
        composer.select_date("2026-02-10", today).unwrap();
        assert_eq!(composer.selected_date(), "2026-02-10");
        composer.select_date("", today).unwrap();
        assert_eq!(composer.state(), ScheduleState::Open { date: None });
    }

    #[test]
    fn past_and_malformed_dates_are_rejected() {
        let today = day("2026-10-19");
        let mut composer = ScheduleComposer::new();
        composer.open();
        composer.select_date("2026-10-25", today).unwrap();

        assert_eq!(
            composer.select_date("2026-10-18", today),
            Err(ScheduleError::BeforeMinimum { date: day("2026-10-18"), min: today })
        );
        assert_eq!(
            composer.select_date("amanhã", today),
            Err(ScheduleError::Malformed("amanhã".to_string()))
        );
        assert_eq!(composer.selected_date(), "2026-10-25");

        composer.select_date("2026-10-19", today).unwrap();
        assert_eq!(composer.selected_date(), min_date(today));
    }

    #[test]
    fn past_date_is_never_confirmable() {
        let today = day("2026-10-19");
        let host = RecordingOpener::default();
        let mut composer = ScheduleComposer::new();
        composer.open();
        assert!(composer.select_date("2026-01-01", today).is_err());
        assert_eq!(composer.confirm(&host), None);
        assert!(host.opened.borrow().is_empty());
    }

    #[test]
    fn selecting_while_closed_fails() {
        let mut composer = ScheduleComposer::new();
        assert_eq!(composer.select_date("2026-03-05", day("2026-01-01")), Err(ScheduleError::Closed));
        assert_eq!(composer.state(), ScheduleState::Closed);
    }

    #[test]
    fn cancel_discards_selection_without_opening() {
        let today = day("2026-01-01");
        let host = RecordingOpener::default();
        let mut composer = ScheduleComposer::new();
        composer.open();
        composer.select_date("2026-03-05", today).unwrap();
        composer.cancel();
        assert_eq!(composer.state(), ScheduleState::Closed);

        composer.open();
        assert_eq!(composer.selected_date(), "");
        assert_eq!(composer.confirm(&host), None);
        assert!(host.opened.borrow().is_empty());
    }

    #[test]
    fn open_twice_keeps_selection() {
        let mut composer = ScheduleComposer::new();
        composer.open();
        composer.select_date("2026-03-05", day("2026-01-01")).unwrap();
        composer.open();
        assert_eq!(composer.selected_date(), "2026-03-05");
    }

    #[test]
    fn end_to_end_link_targets_recipient() {
        let host = RecordingOpener::default();
        let mut composer = ScheduleComposer::new();
        composer.open();
        composer.select_date("2026-01-15", day("2026-01-15")).unwrap();
        let link = composer.confirm(&host).unwrap();

        let (endpoint, _) = link.split_once('?').unwrap();
        assert_eq!(endpoint, format!("https://wa.me/{}", config::WHATSAPP_NUMBER));
        let message = decoded_text(&link);
        assert!(message.contains("15/01/2026"));
        assert!(message.starts_with("Olá! Tenho interesse"));
    }

    #[test]
    fn preview_mentions_formatted_day() {
        assert!(message_preview(day("2026-07-04")).ends_with("demonstração para 04/07/2026."));
    }
}
