//! Built-in fixture data used when no collection is supplied.

use chrono::{Duration, Utc};

use crate::mail::{Account, Address, Message};

pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new("Dana Reyes", "dana@example.com", '◆'),
        Account::new("Dana Reyes", "dana.reyes@fastmail.com", '✦'),
        Account::new("Dana Reyes", "dreyes@oldcorp.net", '▲'),
    ]
}

pub fn sample_messages() -> Vec<Message> {
    let now = Utc::now();

    vec![
        Message::new(
            Address::new("Priya Natarajan", "priya@example.com"),
            "Quarterly roadmap review",
            "Hi Dana,\n\nCould we walk through the Q3 roadmap tomorrow before the \
             steering call? I want to make sure the storage migration is sequenced \
             ahead of the reporting work, otherwise we will be blocked on the new \
             schema for most of August.\n\nI booked the small meeting room for 10:00. \
             Bring the capacity spreadsheet if you have a recent copy.\n\nPriya",
            now - Duration::minutes(35),
        )
        .unread()
        .with_labels(&["work", "meeting"]),
        Message::new(
            Address::new("Marcus Webb", "marcus.webb@example.com"),
            "Re: Budget sign-off",
            "Dana,\n\nFinance came back with two questions on the tooling line: do we \
             still need both license tiers, and can the lab hardware slip to next \
             quarter? I think the answer to the second one is no, but you know the \
             vendor timeline better than I do.\n\nIf you reply with a short \
             justification today I can get the sign-off before the freeze.\n\nMarcus",
            now - Duration::hours(2),
        )
        .unread()
        .with_labels(&["work", "budget"]),
        Message::new(
            Address::new("Elena Sommer", "elena@travelpoint.example"),
            "Flight options for the offsite",
            "Hello,\n\nHere are the three options we discussed for the September \
             offsite. The morning departure is the cheapest but lands quite late:\n\n\
             https://travelpoint.example/fares/BCN-0912\n\nThe refundable fares are \
             about 15% more. Let me know which one to hold, seats are going quickly \
             this close to the fair.\n\nBest regards,\nElena Sommer",
            now - Duration::hours(5),
        )
        .unread()
        .with_labels(&["travel"]),
        Message::new(
            Address::new("Tom Okafor", "tom.okafor@example.com"),
            "Lunch on Thursday?",
            "Hey!\n\nThe new Vietnamese place near the office finally opened. Want to \
             try it Thursday? They apparently stop serving the lunch menu at 14:00 \
             sharp, so earlier is better.\n\nTom",
            now - Duration::days(1) - Duration::hours(3),
        )
        .with_labels(&["personal"]),
        Message::new(
            Address::new("Alicia Fern", "alicia@example.com"),
            "Design review notes",
            "Hi all,\n\nNotes from today's review are in the shared folder. The main \
             decisions: we keep the two-column settings screen, drop the inline \
             preview for attachments, and revisit the empty states once the copy \
             team has had a pass.\n\nAction items are tagged with owners. Shout if I \
             misattributed anything.\n\nAlicia",
            now - Duration::days(2) - Duration::hours(1),
        )
        .with_labels(&["work"]),
        Message::new(
            Address::new("Ravi Singh", "ravi.singh@example.com"),
            "Re: Apartment viewing",
            "Hi Dana,\n\nThe landlord confirmed Saturday at 11:00. It is the third \
             floor flat, the one with the balcony facing the courtyard. I will \
             forward the floor plan when she sends it over.\n\nRavi",
            now - Duration::days(3) - Duration::hours(6),
        )
        .with_labels(&["personal"]),
        Message::new(
            Address::new("Nina Holt", "nina@conf.example.org"),
            "CFP closes Friday",
            "Dear Dana,\n\nA reminder that the call for proposals closes this Friday \
             at midnight UTC. Based on your talk last year we would love to see a \
             submission on the migration tooling.\n\nSubmission portal: \
             https://conf.example.org/cfp\nSpeaker guidelines: \
             https://conf.example.org/speakers\n\nNina Holt\nProgramme committee",
            now - Duration::days(6) - Duration::hours(2),
        )
        .unread()
        .with_labels(&["work", "important"]),
        Message::new(
            Address::new("Sam Delgado", "sam.delgado@example.com"),
            "Photos from the weekend",
            "Hi!\n\nFinally sorted the photos from the hike. The ones from the ridge \
             came out great, the fog cleared exactly when we needed it to. Album \
             link coming separately once the upload finishes.\n\nSam",
            now - Duration::days(12),
        )
        .with_labels(&["personal"]),
        Message::new(
            Address::new("Lena Brandt", "billing@hostco.example"),
            "Invoice #2048 for July",
            "Hello,\n\nPlease find attached the invoice for your hosting plan for \
             July. The amount will be charged to the card on file within five \
             business days. No action is needed unless your billing details have \
             changed.\n\nHostCo Billing",
            now - Duration::days(40),
        )
        .with_labels(&["budget"]),
        Message::new(
            Address::new("The Weekly Parse", "digest@weeklyparse.example"),
            "Year in review: parsers, pipelines, and one big rewrite",
            "Welcome to the annual retrospective issue.\n\nThis year the newsletter \
             covered forty-two releases, one memorable postmortem, and an \
             unreasonable number of benchmark disputes. The five most-read issues \
             are collected below, lightly annotated.\n\nThanks for reading, and see \
             you in January.",
            now - Duration::days(400),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_messages_mix_read_and_unread() {
        let messages = sample_messages();
        assert!(messages.len() >= 8);
        assert!(messages.iter().any(|m| !m.read));
        assert!(messages.iter().any(|m| m.read));
    }

    #[test]
    fn test_sample_messages_are_newest_first() {
        let messages = sample_messages();
        for pair in messages.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_sample_accounts_present() {
        let accounts = sample_accounts();
        assert_eq!(accounts.len(), 3);
        assert!(accounts.iter().all(|a| !a.email.is_empty()));
    }
}
