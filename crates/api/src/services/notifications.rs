//! Notification messages sent when a club is created.

use crate::models::{Account, Club};
use crate::services::mailer::{Mailer, OutgoingEmail};

const CREATED_SUBJECT: &str = "Thanks for adding your club!";

const CREATED_STAFF_SUBJECT: &str = "A new club was added";

/// Notification to the creator's registered address.
#[must_use]
pub fn club_created(account: &Account, to: &str) -> OutgoingEmail {
    let body = format!(
        "Hi {username},\n\n\
         Thanks for adding your club! It is now listed publicly and other\n\
         community members can find it.\n\n\
         You can update or remove the listing at any time with your API token.\n",
        username = account.username
    );

    OutgoingEmail {
        to: vec![to.to_owned()],
        subject: CREATED_SUBJECT.to_owned(),
        body,
    }
}

/// Notification to the configured staff recipient list.
#[must_use]
pub fn club_created_staff(account: &Account, club: &Club, staff_emails: &[String]) -> OutgoingEmail {
    let email = account.email.as_ref().map_or("(none)", |e| e.as_str());
    let body = format!(
        "A new club was just added.\n\n\
         Creator: {username} <{email}>\n\
         Name: {name}\n\
         Location: {location}\n\
         Website: {website}\n\
         Description: {description}\n",
        username = account.username,
        name = club.name,
        location = club.location,
        website = club.website,
        description = club.description,
    );

    OutgoingEmail {
        to: staff_emails.to_vec(),
        subject: CREATED_STAFF_SUBJECT.to_owned(),
        body,
    }
}

/// Send a notification, logging and discarding any failure.
///
/// A send failure must never surface as a request failure.
pub async fn send_best_effort(mailer: &dyn Mailer, mail: OutgoingEmail) {
    if let Err(e) = mailer.send(&mail).await {
        tracing::warn!(
            error = %e,
            subject = %mail.subject,
            "notification send failed"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use clubdesk_core::{AccountId, ClubId, Email};

    use super::*;

    fn account() -> Account {
        Account {
            id: AccountId::new(1),
            username: "user2".to_owned(),
            email: Some(Email::parse("user2@example.org").unwrap()),
            created_at: Utc::now(),
        }
    }

    fn club() -> Club {
        Club {
            id: ClubId::new(1),
            owner_id: AccountId::new(1),
            owner_username: "user2".to_owned(),
            name: "my club2".to_owned(),
            website: "http://myclub2.org/".to_owned(),
            description: "This is my club2.".to_owned(),
            location: "Somewhere else".to_owned(),
            latitude: 1.0,
            longitude: 2.0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_created_mail_addresses_creator() {
        let mail = club_created(&account(), "user2@example.org");
        assert_eq!(mail.to, vec!["user2@example.org"]);
        assert!(mail.body.contains("user2"));
    }

    #[test]
    fn test_staff_mail_carries_creator_and_club_details() {
        let staff = vec!["staff@example.org".to_owned()];
        let mail = club_created_staff(&account(), &club(), &staff);
        assert_eq!(mail.to, vec!["staff@example.org"]);
        assert!(mail.body.contains("user2@example.org"));
        assert!(mail.body.contains("my club2"));
        assert!(mail.body.contains("Somewhere else"));
        assert!(mail.body.contains("http://myclub2.org/"));
        assert!(mail.body.contains("This is my club2."));
    }
}
