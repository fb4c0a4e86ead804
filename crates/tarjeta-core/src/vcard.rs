//! vCard 3.0 contact payload for the QR glyph.

use crate::card::CardData;

/// Build the vCard 3.0 payload encoded into the QR glyph.
///
/// The full name splits on the first space: everything before it is the
/// given name, everything after is the family name. Field values are
/// inserted verbatim, without vCard escaping; the payload's only consumer
/// is the QR symbol.
pub fn contact_string(card: &CardData) -> String {
    let mut parts = card.full_name.split(' ');
    let first_name = parts.next().unwrap_or_default();
    let last_name = parts.collect::<Vec<_>>().join(" ");

    format!(
        "BEGIN:VCARD\n\
         VERSION:3.0\n\
         N:{last_name};{first_name};;;\n\
         FN:{full_name}\n\
         ORG:{company}\n\
         TITLE:{title}\n\
         TEL;TYPE=WORK,VOICE:{phone}\n\
         EMAIL:{email}\n\
         URL:{website}\n\
         END:VCARD",
        full_name = card.full_name,
        company = card.company,
        title = card.title,
        phone = card.phone,
        email = card.email,
        website = card.website,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_on_first_space() {
        let card = CardData {
            full_name: "Ana María López".to_string(),
            ..CardData::default()
        };
        let vcard = contact_string(&card);
        assert!(vcard.contains("N:María López;Ana;;;"));
        assert!(vcard.contains("FN:Ana María López"));
    }

    #[test]
    fn single_word_name_has_empty_family_name() {
        let card = CardData {
            full_name: "Bob".to_string(),
            ..CardData::default()
        };
        assert!(contact_string(&card).contains("N:;Bob;;;"));
    }

    #[test]
    fn empty_card_yields_empty_fields() {
        let vcard = contact_string(&CardData::default());
        assert!(vcard.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
        assert!(vcard.ends_with("END:VCARD"));
        assert!(vcard.contains("N:;;;;"));
        assert!(vcard.contains("FN:\n"));
        assert!(vcard.contains("ORG:\n"));
        assert!(vcard.contains("TEL;TYPE=WORK,VOICE:\n"));
    }

    #[test]
    fn fields_are_inserted_verbatim() {
        // No escaping of vCard metacharacters, by decision
        let card = CardData {
            full_name: "A; B".to_string(),
            company: "Acme, S.A.".to_string(),
            ..CardData::default()
        };
        let vcard = contact_string(&card);
        assert!(vcard.contains("N:B;A;;;;"));
        assert!(vcard.contains("ORG:Acme, S.A."));
    }
}
