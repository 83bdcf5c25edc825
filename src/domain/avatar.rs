pub struct AvatarEvent {
    pub member_id: u64,
    pub username: String,
    pub discriminator: Option<u16>,
    pub avatar_url: String,
    pub avatar: Option<String>,
    /// `None` when the member's previous state wasn't available.
    pub previous_avatar: Option<Option<String>>,
}

impl AvatarEvent {
    #[must_use]
    pub fn tag(&self) -> String {
        match self.discriminator {
            Some(discriminator) => format!("{}#{discriminator:04}", self.username),
            None => self.username.clone(),
        }
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.previous_avatar
            .as_ref()
            .is_some_and(|previous| *previous == self.avatar)
    }
}

#[cfg(test)]
pub(crate) fn test_event(previous_avatar: Option<Option<String>>) -> AvatarEvent {
    AvatarEvent {
        member_id: 42,
        username: String::from("ferris"),
        discriminator: Some(7),
        avatar_url: String::from("https://cdn.discordapp.com/avatars/42/abc.webp"),
        avatar: Some(String::from("abc")),
        previous_avatar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_with_discriminator() {
        assert_eq!(test_event(None).tag(), "ferris#0007");
    }

    #[test]
    fn test_tag_without_discriminator() {
        let mut event = test_event(None);
        event.discriminator = None;
        assert_eq!(event.tag(), "ferris");
    }

    #[test]
    fn test_unknown_previous_avatar_is_a_change() {
        assert!(!test_event(None).is_unchanged());
    }

    #[test]
    fn test_same_avatar_is_unchanged() {
        assert!(test_event(Some(Some(String::from("abc")))).is_unchanged());
    }

    #[test]
    fn test_new_avatar_is_a_change() {
        assert!(!test_event(Some(Some(String::from("old")))).is_unchanged());
        assert!(!test_event(Some(None)).is_unchanged());
    }

    #[test]
    fn test_reset_to_default_avatar_is_a_change() {
        let mut event = test_event(Some(Some(String::from("abc"))));
        event.avatar = None;
        assert!(!event.is_unchanged());
    }
}
