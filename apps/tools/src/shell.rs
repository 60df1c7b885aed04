//! Line-oriented driver over a [`Session`], one command per line.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use shared::domain::{FriendId, Payer};
use split_core::{roster, AddFriendForm, BillSplitForm, ClockIds, IdSource, Session};

const HELP: &str = "\
commands:
  list                    show friends and balances
  toggle                  open or close the add friend form
  add <name> [image-url]  add a friend
  select <id>             select a friend (again to deselect)
  bill <amount>           set the bill total
  expense <amount>        set your expense
  payer you|friend        who paid the bill
  split                   settle the bill with the selected friend
  state                   print the session as JSON
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    List,
    Toggle,
    Add { name: String, image: Option<String> },
    Select(FriendId),
    Bill(String),
    Expense(String),
    Payer(Payer),
    Split,
    State,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<ShellCommand> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        bail!("empty command");
    };
    let rest: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("list", []) => ShellCommand::List,
        ("toggle", []) => ShellCommand::Toggle,
        ("add", [name @ .., last]) if last.contains("://") => ShellCommand::Add {
            name: name.join(" "),
            image: Some(last.to_string()),
        },
        ("add", name) => ShellCommand::Add {
            name: name.join(" "),
            image: None,
        },
        ("select", [id]) => {
            let id = id
                .parse::<i64>()
                .with_context(|| format!("'{id}' is not a friend id"))?;
            ShellCommand::Select(FriendId(id))
        }
        ("bill", [amount]) => ShellCommand::Bill(amount.to_string()),
        ("bill", []) => ShellCommand::Bill(String::new()),
        ("expense", [amount]) => ShellCommand::Expense(amount.to_string()),
        ("expense", []) => ShellCommand::Expense(String::new()),
        ("payer", [who]) => match who.to_ascii_lowercase().as_str() {
            "you" | "user" | "me" => ShellCommand::Payer(Payer::User),
            "friend" => ShellCommand::Payer(Payer::Friend),
            other => bail!("unknown payer '{other}'; use 'you' or 'friend'"),
        },
        ("split", []) => ShellCommand::Split,
        ("state", []) => ShellCommand::State,
        ("help", _) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        (other, _) => bail!("cannot parse '{other}' with those arguments; try 'help'"),
    };
    Ok(command)
}

pub struct Shell<I = ClockIds> {
    session: Session<I>,
    add_friend: AddFriendForm,
    split: Option<BillSplitForm>,
}

impl<I: IdSource> Shell<I> {
    pub fn new(session: Session<I>, avatar_base_url: &str) -> Self {
        Self {
            session,
            add_friend: AddFriendForm::new(avatar_base_url),
            split: None,
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command = match parse_command(line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            };
            if command == ShellCommand::Quit {
                break;
            }

            if let Err(err) = self.execute(command, &mut out) {
                writeln!(out, "error: {err}")?;
            }
        }

        out.flush().context("failed to flush output")
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        match command {
            ShellCommand::List => {
                for row in roster::rows(&self.session) {
                    let marker = if row.is_selected { '*' } else { ' ' };
                    writeln!(out, "{marker} {} {}: {}", row.id, row.name, row.message())?;
                }
            }
            ShellCommand::Toggle => {
                self.session.toggle_add_form();
                if !self.session.is_add_form_open() {
                    self.add_friend.reset();
                }
                let state = if self.session.is_add_form_open() {
                    "open"
                } else {
                    "closed"
                };
                writeln!(out, "add friend form {state}")?;
            }
            ShellCommand::Add { name, image } => {
                self.add_friend.name = name;
                if let Some(image) = image {
                    self.add_friend.image = image;
                }
                let id = self.add_friend.submit(&mut self.session)?;
                let friend = self.session.friend(id).context("added friend vanished")?;
                writeln!(out, "added {} as {id}", friend.name)?;
            }
            ShellCommand::Select(id) => {
                let add_form_was_open = self.session.is_add_form_open();
                self.session.select_friend(id)?;
                if add_form_was_open && !self.session.is_add_form_open() {
                    self.add_friend.reset();
                }
                self.sync_split_form();
                match &self.split {
                    Some(form) => writeln!(out, "{}", form.title())?,
                    None => writeln!(out, "selection cleared")?,
                }
            }
            ShellCommand::Bill(amount) => {
                self.split_form()?.set_bill_total_text(&amount)?;
                self.write_form(out)?;
            }
            ShellCommand::Expense(amount) => {
                self.split_form()?.set_user_expense_text(&amount)?;
                self.write_form(out)?;
            }
            ShellCommand::Payer(payer) => {
                self.split_form()?.set_payer(payer);
                self.write_form(out)?;
            }
            ShellCommand::Split => {
                let form = self.split.as_ref().context("select a friend first")?;
                let friend_id = form.friend_id();
                self.session.confirm_split(form)?;
                self.sync_split_form();

                let row = roster::rows(&self.session)
                    .into_iter()
                    .find(|row| row.id == friend_id)
                    .context("settled friend vanished")?;
                writeln!(out, "{}", row.message())?;
            }
            ShellCommand::State => {
                let json = serde_json::to_string_pretty(&self.session.snapshot())?;
                writeln!(out, "{json}")?;
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    fn split_form(&mut self) -> Result<&mut BillSplitForm> {
        self.split.as_mut().context("select a friend first")
    }

    fn sync_split_form(&mut self) {
        let selected = self.session.selected_friend_id();
        if self.split.as_ref().map(BillSplitForm::friend_id) == selected {
            return;
        }
        self.split = self.session.selected_friend().map(BillSplitForm::new);
    }

    fn write_form<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(form) = &self.split else {
            return Ok(());
        };
        let show = |amount: Option<shared::domain::Money>| {
            amount.map_or_else(|| "-".to_string(), |amount| format!("${amount}"))
        };
        writeln!(
            out,
            "bill {} | your expense {} | {} {} | paid by {}",
            show(form.bill_total()),
            show(form.user_expense()),
            form.friend_expense_label(),
            show(form.friend_expense()),
            form.payer_label(form.payer()),
        )?;
        Ok(())
    }
}
