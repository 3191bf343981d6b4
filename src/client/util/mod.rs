pub mod form;
pub mod options;
pub mod print;

pub use form::{use_form, FormState};
pub use options::{dash, user_options};
pub use print::print_html;

use chrono::NaiveDate;

/// The local calendar date, used as "today" by validation and date defaults
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
