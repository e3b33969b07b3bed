use outreach_calendar::CalendarController;
use outreach_calendar::form::DraftField;
use outreach_calendar::EventColor;
use outreach_calendar::utils::{print_appointment_list, print_month};


fn main() {
    env_logger::init();

    let mut calendar = CalendarController::on_system_clock();

    let samples = [
        (1, "Intake interview", "09:00", EventColor::Blue),
        (1, "Home visit", "11:30", EventColor::Green),
        (1, "Phone follow-up", "14:00", EventColor::Orange),
        (1, "Team meeting", "16:00", EventColor::Purple),
        (15, "Vaccination clinic", "10:00", EventColor::Red),
    ];
    for (day, title, time, color) in samples.iter() {
        if let Err(err) = calendar.select_date(*day) {
            log::error!("Unable to select day {}: {}", day, err);
            continue;
        }
        calendar.edit_field(DraftField::Title(title.to_string()));
        calendar.edit_field(DraftField::Time(time.to_string()));
        calendar.edit_field(DraftField::Color(*color));
        if let Err(err) = calendar.commit_form() {
            log::error!("Unable to add {:?}: {}", title, err);
        }
    }

    print_month(&calendar.grid());
    println!();
    println!("Upcoming appointments:");
    print_appointment_list(&calendar.upcoming());
}
