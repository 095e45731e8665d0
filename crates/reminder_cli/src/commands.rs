//! Text command parsing and response rendering.
//!
//! # Responsibility
//! - Turn one input line into a typed `Command`.
//! - Run commands against a `ReminderService` and render the reply text.
//!
//! # Invariants
//! - Every input line produces exactly one reply string.
//! - Store errors are rendered, never propagated as panics.

use crate::dates::{format_date, parse_date_token};
use log::info;
use reminder_core::{Clock, Reminder, ReminderId, ReminderService};

pub const BAD_ARGUMENT_RESPONSE: &str = "Bad argument, try one more time";
pub const SUCCESS_RESPONSE: &str = "Success! =)";
pub const UNKNOWN_COMMAND_RESPONSE: &str = "Unknown command, try /help";

/// Command names with their help text, in help display order.
const COMMANDS: &[(&str, &str)] = &[
    ("add", "[dd.mm.yy / today / tomorrow] [text] adds a new reminder"),
    ("list", "shows all your plans in chronological order"),
    ("rmout", "removes outdated records"),
    ("rm", "[id] removes record with given id"),
    ("edit", "[id] [new text] changes the reminder text"),
    ("today", "shows today's activities"),
    ("fordays", "[count] shows records for next 'count' days"),
    ("help", "show this menu"),
];

/// Parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add { date_token: String, text: String },
    List,
    RemoveOutdated,
    Remove(ReminderId),
    Edit { id: ReminderId, text: String },
    Today,
    ForDays(i64),
}

impl Command {
    /// Name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Add { .. } => "add",
            Self::List => "list",
            Self::RemoveOutdated => "rmout",
            Self::Remove(_) => "rm",
            Self::Edit { .. } => "edit",
            Self::Today => "today",
            Self::ForDays(_) => "fordays",
        }
    }
}

/// Reasons a line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    BadArgument,
}

/// Parses `/name args`; the leading slash is optional.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let line = line.strip_prefix('/').unwrap_or(line);
    let (name, args) = match line.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (line, ""),
    };

    match name {
        "" => Err(ParseError::Empty),
        "help" => Ok(Command::Help),
        "list" => Ok(Command::List),
        "rmout" => Ok(Command::RemoveOutdated),
        "today" => Ok(Command::Today),
        "rm" => parse_id(args).map(Command::Remove),
        "fordays" => match args.parse::<i64>() {
            Ok(count) if count >= 1 => Ok(Command::ForDays(count)),
            _ => Err(ParseError::BadArgument),
        },
        "add" => {
            let (date_token, text) = split_head(args).ok_or(ParseError::BadArgument)?;
            Ok(Command::Add {
                date_token: date_token.to_string(),
                text: text.to_string(),
            })
        }
        "edit" => {
            let (id, text) = split_head(args).ok_or(ParseError::BadArgument)?;
            Ok(Command::Edit {
                id: parse_id(id)?,
                text: text.to_string(),
            })
        }
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Parses and executes one input line.
pub fn handle_line<C: Clock>(service: &ReminderService<C>, line: &str) -> String {
    match parse_command(line) {
        Ok(command) => execute(service, &command),
        Err(ParseError::Empty) => String::new(),
        Err(ParseError::Unknown(name)) => {
            info!("event=command module=cli status=unknown name={}", name);
            UNKNOWN_COMMAND_RESPONSE.to_string()
        }
        Err(ParseError::BadArgument) => BAD_ARGUMENT_RESPONSE.to_string(),
    }
}

/// Executes a parsed command and renders the reply.
pub fn execute<C: Clock>(service: &ReminderService<C>, command: &Command) -> String {
    info!("event=command module=cli status=start name={}", command.name());

    match command {
        Command::Help => help_text(),
        Command::Add { date_token, text } => {
            let Some(date) = parse_date_token(date_token, service.current_day()) else {
                return BAD_ARGUMENT_RESPONSE.to_string();
            };
            match service.add(text.as_str(), date) {
                Ok(_) => SUCCESS_RESPONSE.to_string(),
                Err(err) => err.to_string(),
            }
        }
        Command::List => render_list(service),
        Command::RemoveOutdated => match service.remove_outdated() {
            0 => "There aren't outdated records".to_string(),
            removed => format!("{removed} records were deleted"),
        },
        Command::Remove(id) => match service.remove(*id) {
            Ok(()) => SUCCESS_RESPONSE.to_string(),
            Err(err) => err.to_string(),
        },
        Command::Edit { id, text } => match service.edit(*id, text.as_str()) {
            Ok(()) => SUCCESS_RESPONSE.to_string(),
            Err(err) => err.to_string(),
        },
        Command::Today => {
            let today = service.today();
            if today.is_empty() {
                return "Nothing to do today =(".to_string();
            }
            format!(
                "{} things to do today\n\n{}",
                today.len(),
                render_reminders(&today)
            )
        }
        Command::ForDays(count) => match service.for_days(*count) {
            Ok(items) if items.is_empty() => format!("Nothing to do next {count} days =("),
            Ok(items) => format!(
                "{} things to do next {count} days\n\n{}",
                items.len(),
                render_reminders(&items)
            ),
            Err(err) => err.to_string(),
        },
    }
}

pub fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|(name, description)| format!("/{name} {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one reminder as `#id dd.mm.yy text`.
pub fn render_reminder(reminder: &Reminder) -> String {
    format!(
        "#{} {} {}",
        reminder.id(),
        format_date(reminder.date()),
        reminder.text()
    )
}

fn render_reminders(reminders: &[Reminder]) -> String {
    reminders
        .iter()
        .map(render_reminder)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_list<C: Clock>(service: &ReminderService<C>) -> String {
    let agenda = service.agenda();
    if agenda.is_empty() {
        return "You haven't planned anything yet".to_string();
    }

    let mut sections = Vec::with_capacity(2);
    if !agenda.outdated.is_empty() {
        sections.push(format!(
            "There are outdated entries on your list\n\n{}",
            render_reminders(&agenda.outdated)
        ));
    }
    if !agenda.upcoming.is_empty() {
        sections.push(format!(
            "Your actual plans\n\n{}",
            render_reminders(&agenda.upcoming)
        ));
    }
    sections.join("\n\n")
}

fn parse_id(value: &str) -> Result<ReminderId, ParseError> {
    value.trim().parse().map_err(|_| ParseError::BadArgument)
}

/// Splits `head rest` where both parts must be non-empty.
fn split_head(args: &str) -> Option<(&str, &str)> {
    let (head, rest) = args.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    Some((head, rest))
}

#[cfg(test)]
mod tests {
    use super::{
        handle_line, help_text, parse_command, Command, ParseError, BAD_ARGUMENT_RESPONSE,
        SUCCESS_RESPONSE, UNKNOWN_COMMAND_RESPONSE,
    };
    use chrono::NaiveDate;
    use reminder_core::{FixedClock, ReminderService};

    fn service_at(y: i32, m: u32, d: u32) -> (ReminderService<FixedClock>, FixedClock) {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"));
        (ReminderService::new(clock.clone()), clock)
    }

    #[test]
    fn parse_accepts_optional_slash_and_multiword_text() {
        assert_eq!(parse_command("/list"), Ok(Command::List));
        assert_eq!(parse_command("today"), Ok(Command::Today));
        assert_eq!(
            parse_command("/add 05.03.24 buy  milk and eggs"),
            Ok(Command::Add {
                date_token: "05.03.24".to_string(),
                text: "buy  milk and eggs".to_string(),
            })
        );
        assert_eq!(
            parse_command("/edit 3 new text"),
            Ok(Command::Edit {
                id: 3,
                text: "new text".to_string(),
            })
        );
    }

    #[test]
    fn parse_rejects_bad_arguments() {
        assert_eq!(parse_command("/rm abc"), Err(ParseError::BadArgument));
        assert_eq!(parse_command("/fordays 0"), Err(ParseError::BadArgument));
        assert_eq!(parse_command("/fordays x"), Err(ParseError::BadArgument));
        assert_eq!(parse_command("/add today"), Err(ParseError::BadArgument));
        assert_eq!(parse_command("/edit 4"), Err(ParseError::BadArgument));
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_command("/snooze 1"),
            Err(ParseError::Unknown("snooze".to_string()))
        );
    }

    #[test]
    fn list_renders_outdated_and_actual_sections() {
        let (service, _) = service_at(2024, 3, 5);
        assert_eq!(handle_line(&service, "/list"), "You haven't planned anything yet");

        assert_eq!(handle_line(&service, "/add 05.03.24 A"), SUCCESS_RESPONSE);
        assert_eq!(handle_line(&service, "/add 01.03.24 B"), SUCCESS_RESPONSE);
        assert_eq!(handle_line(&service, "/add 10.03.24 C"), SUCCESS_RESPONSE);

        assert_eq!(
            handle_line(&service, "/list"),
            "There are outdated entries on your list\n\n#2 01.03.24 B\n\n\
             Your actual plans\n\n#1 05.03.24 A\n#3 10.03.24 C"
        );
    }

    #[test]
    fn today_and_fordays_follow_the_clock() {
        let (service, clock) = service_at(2024, 3, 5);
        handle_line(&service, "/add today A");
        handle_line(&service, "/add tomorrow B");

        assert_eq!(
            handle_line(&service, "/today"),
            "1 things to do today\n\n#1 05.03.24 A"
        );
        assert_eq!(
            handle_line(&service, "/fordays 2"),
            "2 things to do next 2 days\n\n#1 05.03.24 A\n#2 06.03.24 B"
        );

        clock.set_date(NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date"));
        assert_eq!(handle_line(&service, "/today"), "Nothing to do today =(");
        assert_eq!(
            handle_line(&service, "/fordays 3"),
            "Nothing to do next 3 days =("
        );
        assert_eq!(handle_line(&service, "/rmout"), "2 records were deleted");
        assert_eq!(
            handle_line(&service, "/rmout"),
            "There aren't outdated records"
        );
    }

    #[test]
    fn edit_and_remove_report_missing_ids() {
        let (service, _) = service_at(2024, 3, 5);
        handle_line(&service, "/add today A");

        assert_eq!(handle_line(&service, "/edit 1 A2"), SUCCESS_RESPONSE);
        assert_eq!(handle_line(&service, "/edit 9 x"), "reminder not found: 9");
        assert_eq!(handle_line(&service, "/rm 1"), SUCCESS_RESPONSE);
        assert_eq!(handle_line(&service, "/rm 1"), "reminder not found: 1");
    }

    #[test]
    fn invalid_input_gets_fixed_replies() {
        let (service, _) = service_at(2024, 3, 5);
        assert_eq!(handle_line(&service, "/add 99.99.99 x"), BAD_ARGUMENT_RESPONSE);
        assert_eq!(handle_line(&service, "/fordays -2"), BAD_ARGUMENT_RESPONSE);
        assert_eq!(handle_line(&service, "/what"), UNKNOWN_COMMAND_RESPONSE);
        assert_eq!(handle_line(&service, ""), "");
        assert!(handle_line(&service, "/help").starts_with("/add "));
        assert_eq!(help_text().lines().count(), 8);
    }
}
