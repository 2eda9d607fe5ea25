//! Admin command - interactive member administration console
//!
//! A single-threaded menu loop over the member store: add, edit, delete,
//! list, exit. Every error is printed and control returns to the menu;
//! nothing here is fatal to the process.

use console::style;
use dialoguer::{Input, Password, Select};
use std::sync::Arc;

use crate::config::{AppConfig, LogFormat};
use crate::domain::member::Member;
use crate::domain::DomainError;
use crate::infrastructure::identity::{CreateIdentityRequest, IdentityService};
use crate::infrastructure::logging;
use crate::infrastructure::member::MemberService;

const MENU_ITEMS: &[&str] = &[
    "Add member",
    "Edit member",
    "Delete member",
    "List members",
    "Exit",
];

/// Run the interactive administration console
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();

    // Warnings only; info-level logs would garble the prompts
    logging::init_logging(&logging::LoggingConfig {
        level: "warn".to_string(),
        format: LogFormat::Pretty,
    });

    let state = crate::create_app_state(&config).await?;

    run_menu(state.identity_service, state.member_service).await
}

async fn run_menu(
    identities: Arc<IdentityService>,
    members: Arc<MemberService>,
) -> anyhow::Result<()> {
    println!();
    println!("{}", style("Gym Management System").bold());

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => add_member(&identities, &members).await,
            1 => edit_member(&members).await,
            2 => delete_member(&members).await,
            3 => list_members(&members).await,
            _ => {
                println!("Exiting...");
                return Ok(());
            }
        };

        if let Err(err) = result {
            println!("{}", style(err.to_string()).red());
        }
    }
}

async fn add_member(
    identities: &IdentityService,
    members: &MemberService,
) -> anyhow::Result<()> {
    let username = prompt_username("Enter username")?;

    if identities.login_exists(&username).await? {
        println!("User '{}' already exists!", username);
        return Ok(());
    }

    let password = Password::new().with_prompt("Enter password").interact()?;
    let age = prompt_age("Enter age")?;
    let membership_type = prompt_membership("Enter membership type")?;

    identities
        .create(CreateIdentityRequest {
            login: username.clone(),
            password,
            ..Default::default()
        })
        .await?;
    members.create(&username, age, &membership_type).await?;

    println!("Member '{}' added successfully!", username);
    Ok(())
}

async fn edit_member(members: &MemberService) -> anyhow::Result<()> {
    let username = prompt_username("Enter username to edit")?;

    let member = match members.find_by_login(&username).await? {
        Some(member) => member,
        None => {
            println!("Member '{}' not found!", username);
            return Ok(());
        }
    };

    println!("Leave blank to keep current value.");

    let age = prompt_age_optional(&format!("Current age: {}, new age", member.age()))?;

    let membership_input: String = Input::new()
        .with_prompt(format!(
            "Current membership: {}, new membership",
            member.membership_type()
        ))
        .allow_empty(true)
        .interact_text()?;
    let membership_input = membership_input.trim();
    let membership_type = (!membership_input.is_empty()).then_some(membership_input);

    members.update(&username, age, membership_type).await?;

    println!("Member '{}' updated successfully!", username);
    Ok(())
}

async fn delete_member(members: &MemberService) -> anyhow::Result<()> {
    let username = prompt_username("Enter username to delete")?;

    let confirm: String = Input::new()
        .with_prompt(format!(
            "Are you sure you want to delete '{}'? [yes/no]",
            username
        ))
        .interact_text()?;

    if !confirmed(&confirm) {
        println!("Delete cancelled.");
        return Ok(());
    }

    match members.delete(&username).await {
        Ok(()) => println!("Member '{}' deleted successfully!", username),
        Err(DomainError::NotFound { .. }) => println!("Member '{}' not found!", username),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

async fn list_members(members: &MemberService) -> anyhow::Result<()> {
    let all = members.list().await?;

    if all.is_empty() {
        println!("No members found.");
        return Ok(());
    }

    println!();
    println!("All gym members:");
    for member in &all {
        println!("{}", format_member(member));
    }
    println!();

    Ok(())
}

fn prompt_username(prompt: &str) -> anyhow::Result<String> {
    let username: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(username.trim().to_string())
}

/// Prompt for an age, re-prompting until the input is a positive integer
fn prompt_age(prompt: &str) -> anyhow::Result<i32> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;

        match parse_age(input.trim()) {
            Ok(age) => return Ok(age),
            Err(message) => println!("{}", message),
        }
    }
}

/// Like `prompt_age`, but blank input means "keep the current value"
fn prompt_age_optional(prompt: &str) -> anyhow::Result<Option<i32>> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim();

        if input.is_empty() {
            return Ok(None);
        }

        match parse_age(input) {
            Ok(age) => return Ok(Some(age)),
            Err(message) => println!("{}", message),
        }
    }
}

/// Prompt for a membership type, re-prompting until the input is
/// non-blank. Runs before any record is created, like the age prompt.
fn prompt_membership(prompt: &str) -> anyhow::Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        match parse_membership(&input) {
            Ok(membership) => return Ok(membership),
            Err(message) => println!("{}", message),
        }
    }
}

fn parse_age(input: &str) -> Result<i32, String> {
    let age: i32 = input
        .parse()
        .map_err(|_| format!("'{}' is not a whole number, try again.", input))?;

    if age <= 0 {
        return Err("Age must be a positive integer, try again.".to_string());
    }

    Ok(age)
}

fn parse_membership(input: &str) -> Result<String, String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err("Membership type cannot be empty, try again.".to_string());
    }

    Ok(trimmed.to_string())
}

fn confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

fn format_member(member: &Member) -> String {
    format!(
        "- {}, Age: {}, Membership: {}, Joined: {}",
        member.login(),
        member.age(),
        member.membership_type(),
        member.join_date()
    )
}
