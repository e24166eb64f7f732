use userdeck_pager::Pager;
use userdeck_types::User;

pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users available".to_string();
    }

    let width = users.len().to_string().len();
    let mut lines: Vec<String> = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            format!(
                "{:>width$}. {} <{}> @{}",
                i + 1,
                user.full_name(),
                user.email,
                user.username,
                width = width
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!("{} user(s)", users.len()));
    lines.join("\n")
}

/// Renders the pager's current user as a plain-text card.
pub fn format_pager_card(pager: &Pager) -> String {
    if pager.is_loading() {
        return "Loading users...".to_string();
    }
    if pager.is_errored() {
        return "Error: failed to load users".to_string();
    }
    match pager.current_user() {
        Some(user) => format_user_card(user, pager.index(), pager.len()),
        None => "No users available".to_string(),
    }
}

pub fn format_user_card(user: &User, index: usize, total: usize) -> String {
    let fields = user.fields();
    let label_width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut lines = vec![
        user.full_name(),
        format!("User {} of {}", index + 1, total),
        String::new(),
    ];
    for (label, value) in &fields {
        lines.push(format!("{:<width$}  {}", label, value, width = label_width));
    }
    lines.join("\n")
}
