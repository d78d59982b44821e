use poise::serenity_prelude::UserId;

/// Reads a single `<@id>`, `<@!id>` or bare id.
pub fn parse_user(text: &str) -> Option<UserId> {
    let text = text.trim();
    let id = text
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|inner| inner.strip_prefix('!').unwrap_or(inner))
        .unwrap_or(text);

    id.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
}

/// Every user mentioned in `text`, in order, without repeats.
///
/// Anything that isn't a mention is skipped.
pub fn parse_users(text: &str) -> Vec<UserId> {
    let mut users = Vec::new();

    for user in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter_map(parse_user)
    {
        if !users.contains(&user) {
            users.push(user);
        }
    }

    users
}

/// The first word of `text` that isn't a mention, lowercased.
pub fn requested_category(text: &str) -> Option<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .find(|word| parse_user(word).is_none())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::UserId;
    use pretty_assertions::assert_eq;

    use super::{parse_user, parse_users, requested_category};

    #[test]
    fn mention_forms() {
        assert_eq!(parse_user("<@123>"), Some(UserId::new(123)));
        assert_eq!(parse_user("<@!123>"), Some(UserId::new(123)));
        assert_eq!(parse_user(" 123 "), Some(UserId::new(123)));
        assert_eq!(parse_user("<#123>"), None);
        assert_eq!(parse_user("<@0>"), None);
        assert_eq!(parse_user("lizard"), None);
    }

    #[test]
    fn many_mentions() {
        assert_eq!(
            parse_users("<@1> <@!2>,<@3>  hello <@1>"),
            [UserId::new(1), UserId::new(2), UserId::new(3)]
        );
        assert!(parse_users("").is_empty());
    }

    #[test]
    fn category_among_mentions() {
        assert_eq!(requested_category("<@1> <@2> Food"), Some("food".to_owned()));
        assert_eq!(requested_category("animals, <@1>"), Some("animals".to_owned()));
        assert_eq!(requested_category("<@1> <@2>"), None);
    }
}
