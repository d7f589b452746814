use crate::domain::language::Language;
use crate::domain::ports::{Localizer, Text};
use crate::domain::transaction::PaymentStatus;

/// Built-in localization tables for English, Kannada and Hindi.
///
/// The non-English tables are partial on purpose: keys that are only
/// ever printed in English are absent and resolve through the English
/// fallback.
#[derive(Debug, Default)]
pub struct StaticLocalizer;

impl StaticLocalizer {
    pub fn new() -> Self {
        Self
    }
}

fn en(key: Text) -> &'static str {
    match key {
        Text::LanguageMenu => {
            "Select language / ಭಾಷೆ ಆಯ್ಕೆ ಮಾಡಿ / भाषा चुनें:\n1: English\n2: ಕನ್ನಡ\n3: हिन्दी"
        }
        Text::LanguagePrompt => {
            "Enter your choice / ನಿಮ್ಮ ಆಯ್ಕೆಯನ್ನು ನಮೂದಿಸಿ / अपनी पसंद दर्ज करें: "
        }
        Text::Terms => {
            "\nTerms and Conditions:\n1. Visitors must maintain silence.\n2. Visitors should not create any nuisance in the museum."
        }
        Text::AcceptTerms => "Click OK to accept the terms and conditions: ",
        Text::Welcome => "Welcome to the Bengaluru Museum Ticket Booking System.",
        Text::Menu => {
            "\nOptions:\n1: Book a ticket\n2: Check ticket status\n3: Cancel a ticket\n4: Exit"
        }
        Text::EnterChoice => "Enter your choice: ",
        Text::EnterName => "Enter your name: ",
        Text::AvailableDestinations => "Available destinations:",
        Text::SelectDestination => "Select your destination by number: ",
        Text::PriceLine => "The price for {} is Rs{}.",
        Text::SelectPaymentMethod => "Select payment method (QR/UPI): ",
        Text::TransactionIdLine => "Transaction ID: {}",
        Text::UpiPayLine => "Please use the following UPI ID to make the payment of Rs{}: {}",
        Text::UpiLinkLine => "Or use this UPI link on your mobile device: {}",
        Text::UpiConfirmLine => "After completing the payment, confirm it using this link: {}",
        Text::PaymentCompletedPrompt => "Has the payment been completed? (1 for Yes, 2 for No): ",
        Text::PaymentConfirmed => "Payment confirmed. Thank you!",
        Text::PaymentNotConfirmed => "Payment not confirmed. Please try again.",
        Text::TicketBooked => "Ticket booked for {} to {}.",
        Text::TicketIdLine => "Your ticket ID is {}. Please keep it safe.",
        Text::EnterTicketId => "Enter your ticket ID: ",
        Text::StatusLine => "Ticket ID {} status: {}.",
        Text::TicketNotFound => "Ticket not found.",
        Text::TicketCancelled => "Ticket ID {} has been cancelled.",
        Text::NoTicketForId => "No ticket found for ID {}.",
        Text::Goodbye => "Thank you for using the Bengaluru Museum Ticket Booking System.",
        Text::InvalidChoice => "Invalid choice. Please try again.",
        Text::InvalidNumber => "That is not a valid number. Please try again.",
        Text::PaymentFailed => "Payment could not be completed: {}",
    }
}

fn kn(key: Text) -> Option<&'static str> {
    match key {
        Text::Terms => Some(
            "\nನಿಯಮಗಳು ಮತ್ತು ಷರತ್ತುಗಳು:\n1. ಭೇಟಿ ನೀಡುವವರು ಮೌನವನ್ನು ಕಾಪಾಡಬೇಕು.\n2. ಭೇಟಿದಾರರು ಮ್ಯೂಸಿಯಮ್‌ನಲ್ಲಿ ಯಾವುದೇ ಗಲಾಟೆ ಸೃಷ್ಟಿಸಬಾರದು.",
        ),
        Text::AcceptTerms => Some("ನಿಯಮಗಳು ಮತ್ತು ಷರತ್ತುಗಳನ್ನು ಒಪ್ಪಲು OK ಕ್ಲಿಕ್ ಮಾಡಿ: "),
        Text::Welcome => Some("ಬೆಂಗಳೂರು ಮ್ಯೂಸಿಯಮ್ ಟಿಕೆಟ್ ಬುಕ್ಕಿಂಗ್ ವ್ಯವಸ್ಥೆಗೆ ಸ್ವಾಗತ."),
        Text::Menu => Some(
            "\nಆಯ್ಕೆಗಳು:\n1: ಟಿಕೆಟ್ ಬುಕ್ ಮಾಡಿ\n2: ಟಿಕೆಟ್ ಸ್ಥಿತಿ ಪರಿಶೀಲಿಸಿ\n3: ಟಿಕೆಟ್ ರದ್ದುಮಾಡಿ\n4: ನಿರ್ಗಮಿಸಿ",
        ),
        Text::EnterChoice => Some("ನಿಮ್ಮ ಆಯ್ಕೆಯನ್ನು ನಮೂದಿಸಿ: "),
        Text::EnterName => Some("ನಿಮ್ಮ ಹೆಸರು ನಮೂದಿಸಿ: "),
        Text::AvailableDestinations => Some("ಲಭ್ಯವಿರುವ ಸ್ಥಳಗಳು:"),
        Text::SelectDestination => Some("ನಿಮ್ಮ ಗಮ್ಯಸ್ಥಾನವನ್ನು ಸಂಖ್ಯೆಯಿಂದ ಆಯ್ಕೆ ಮಾಡಿ: "),
        Text::PriceLine => Some("{} ಯ ಬೆಲೆ Rs{} ಆಗಿದೆ."),
        Text::TransactionIdLine => Some("ವಹಿವಾಟು ID: {}"),
        Text::UpiPayLine => Some("ದಯವಿಟ್ಟು ಈ UPI ID ಅನ್ನು ಬಳಸಿಕೊಂಡು {} ರುಪಾಯಿಗಳನ್ನು ಪಾವತಿಸಿ: {}"),
        Text::UpiLinkLine => Some("ಅಥವಾ ನಿಮ್ಮ ಮೊಬೈಲ್ ಸಾಧನದಲ್ಲಿ ಈ UPI ಲಿಂಕ್ ಅನ್ನು ಬಳಸಿ: {}"),
        Text::UpiConfirmLine => Some("ಪಾವತಿಯನ್ನು ಪೂರ್ಣಗೊಳಿಸಿದ ನಂತರ, ಈ ಲಿಂಕ್ ಬಳಸಿಕೊಂಡು ದೃಢೀಕರಿಸಿ: {}"),
        Text::PaymentCompletedPrompt => Some("ಪಾವತಿ ಪೂರ್ಣಗೊಂಡಿತೇ? (1 ಹೌದು, 2 ಇಲ್ಲ): "),
        Text::PaymentConfirmed => Some("ಪಾವತಿ ದೃಢೀಕರಿಸಲಾಗಿದೆ. ಧನ್ಯವಾದಗಳು!"),
        Text::PaymentNotConfirmed => Some("ಪಾವತಿ ದೃಢೀಕರಿಸಲಿಲ್ಲ. ದಯವಿಟ್ಟು ಪುನರಾಯಿಸಲು ಪ್ರಯತ್ನಿಸಿ."),
        Text::TicketBooked => Some("{} ರಿಗೆ {} ಗೆ ಟಿಕೆಟ್ ಬುಕ್ ಮಾಡಲಾಗಿದೆ."),
        Text::TicketIdLine => Some("ನಿಮ್ಮ ಟಿಕೆಟ್ ID {}. ದಯವಿಟ್ಟು ಅದನ್ನು ಸುರಕ್ಷಿತವಾಗಿ ಇಟ್ಟುಕೊಳ್ಳಿ."),
        Text::StatusLine => Some("ಟಿಕೆಟ್ ID {} ಸ್ಥಿತಿ: {}."),
        Text::TicketNotFound => Some("ಟಿಕೆಟ್ ಕಂಡುಬಂದಿಲ್ಲ."),
        Text::TicketCancelled => Some("ಟಿಕೆಟ್ ID {} ರದ್ದುಮಾಡಲಾಗಿದೆ."),
        Text::NoTicketForId => Some("ID {} ರಿಗಾಗಿ ಯಾವುದೇ ಟಿಕೆಟ್ ಪತ್ತೆಯಾಗಲಿಲ್ಲ."),
        Text::Goodbye => Some("ಬೆಂಗಳೂರು ಮ್ಯೂಸಿಯಮ್ ಟಿಕೆಟ್ ಬುಕ್ಕಿಂಗ್ ವ್ಯವಸ್ಥೆಯನ್ನು ಬಳಸಿದಕ್ಕಾಗಿ ಧನ್ಯವಾದಗಳು."),
        Text::InvalidChoice => Some("ಅಮಾನ್ಯ ಆಯ್ಕೆ. ದಯವಿಟ್ಟು ಪುನಃ ಪ್ರಯತ್ನಿಸಿ."),
        _ => None,
    }
}

fn hi(key: Text) -> Option<&'static str> {
    match key {
        Text::Terms => Some(
            "\nनियम और शर्तें:\n1. आगंतुकों को मौन बनाए रखना चाहिए।\n2. आगंतुकों को संग्रहालय में कोई उपद्रव नहीं करना चाहिए।",
        ),
        Text::AcceptTerms => Some("नियम और शर्तों को स्वीकार करने के लिए OK दबाएं: "),
        Text::Welcome => Some("बेंगलुरु संग्रहालय टिकट बुकिंग प्रणाली में आपका स्वागत है।"),
        Text::Menu => Some(
            "\nविकल्प:\n1: टिकट बुक करें\n2: टिकट की स्थिति जांचें\n3: टिकट रद्द करें\n4: बाहर निकलें",
        ),
        Text::EnterChoice => Some("अपनी पसंद दर्ज करें: "),
        Text::EnterName => Some("अपना नाम दर्ज करें: "),
        Text::AvailableDestinations => Some("उपलब्ध स्थान:"),
        Text::SelectDestination => Some("संख्या द्वारा अपना गंतव्य चुनें: "),
        Text::PriceLine => Some("{} के लिए कीमत Rs{} है।"),
        Text::TransactionIdLine => Some("लेन-देन ID: {}"),
        Text::UpiPayLine => Some("कृपया इस UPI ID का उपयोग करके {} रुपये का भुगतान करें: {}"),
        Text::UpiLinkLine => Some("या अपने मोबाइल डिवाइस पर इस UPI लिंक का उपयोग करें: {}"),
        Text::UpiConfirmLine => Some("भुगतान पूरा करने के बाद, इस लिंक का उपयोग करके इसे पुष्टि करें: {}"),
        Text::PaymentCompletedPrompt => Some("क्या भुगतान पूरा हो गया है? (1 हां के लिए, 2 नहीं के लिए): "),
        Text::PaymentConfirmed => Some("भुगतान की पुष्टि हो गई है। धन्यवाद!"),
        Text::PaymentNotConfirmed => Some("भुगतान की पुष्टि नहीं हुई है। कृपया पुनः प्रयास करें।"),
        Text::TicketBooked => Some("{} के लिए {} का टिकट बुक किया गया है।"),
        Text::TicketIdLine => Some("आपका टिकट ID {} है। कृपया इसे सुरक्षित रखें।"),
        Text::StatusLine => Some("टिकट ID {} स्थिति: {}."),
        Text::TicketNotFound => Some("टिकट नहीं मिला।"),
        Text::TicketCancelled => Some("टिकट ID {} रद्द कर दिया गया है।"),
        Text::NoTicketForId => Some("ID {} के लिए कोई टिकट नहीं मिला।"),
        Text::Goodbye => Some("बेंगलुरु संग्रहालय टिकट बुकिंग प्रणाली का उपयोग करने के लिए धन्यवाद।"),
        Text::InvalidChoice => Some("अमान्य विकल्प। कृपया पुनः प्रयास करें।"),
        _ => None,
    }
}

const DESTINATIONS_KN: &[(&str, &str)] = &[
    ("The government museum bengaluru", "ಸರ್ಕಾರಿ ಮ್ಯೂಸಿಯಮ್ ಬೆಂಗಳೂರು"),
    ("Gandhi bavan bengaluru", "ಗಾಂಧಿ ಭವನ ಬೆಂಗಳೂರು"),
    ("Kempegowda museum bengaluru", "ಕೆಂಪೇಗೌಡ ಮ್ಯೂಸಿಯಮ್ ಬೆಂಗಳೂರು"),
    (
        "Venkatappa art gallery bengaluru",
        "ವೆಂಕಟಪ್ಪ ಆರ್ಟ್ ಗ್ಯಾಲರಿ ಬೆಂಗಳೂರು",
    ),
    (
        "NIMHANS brain museum bengaluru",
        "ನಿಮ್ಹಾನ್ಸ್ ಮೆದುಳು ಮ್ಯೂಸಿಯಮ್ ಬೆಂಗಳೂರು",
    ),
    (
        "National gallery of modern art bengaluru",
        "ನೇಷನಲ್ ಗ್ಯಾಲರಿ ಆಫ್ ಮೋಡರ್ನ್ ಆರ್ಟ್ ಬೆಂಗಳೂರು",
    ),
    (
        "HAL heritage centre and aerospce museum bengaluru",
        "ಎಚ್ಎಎಲ್ ಹೆರಿಟೇಜ್ ಸೆಂಟರ್ ಮತ್ತು ಏರೋಸ್ಪೇಸ್ ಮ್ಯೂಸಿಯಮ್ ಬೆಂಗಳೂರು",
    ),
];

const DESTINATIONS_HI: &[(&str, &str)] = &[
    ("The government museum bengaluru", "सरकारी संग्रहालय बेंगलुरु"),
    ("Gandhi bavan bengaluru", "गांधी भवन बेंगलुरु"),
    ("Kempegowda museum bengaluru", "केम्पेगौड़ा संग्रहालय बेंगलुरु"),
    ("Venkatappa art gallery bengaluru", "वेंकटप्पा आर्ट गैलरी बेंगलुरु"),
    ("NIMHANS brain museum bengaluru", "निमहांस ब्रेन संग्रहालय बेंगलुरु"),
    (
        "National gallery of modern art bengaluru",
        "नेशनल गैलरी ऑफ मॉडर्न आर्ट बेंगलुरु",
    ),
    (
        "HAL heritage centre and aerospce museum bengaluru",
        "एचएएल हेरिटेज सेंटर और एयरोस्पेस संग्रहालय बेंगलुरु",
    ),
];

fn translate<'a>(table: &[(&str, &'a str)], name: &'a str) -> &'a str {
    table
        .iter()
        .find(|(en_name, _)| *en_name == name)
        .map_or(name, |&(_, translated)| translated)
}

impl Localizer for StaticLocalizer {
    fn text(&self, language: Language, key: Text) -> &str {
        match language {
            Language::En => en(key),
            Language::Kn => kn(key).unwrap_or_else(|| en(key)),
            Language::Hi => hi(key).unwrap_or_else(|| en(key)),
        }
    }

    fn destination<'a>(&'a self, language: Language, name: &'a str) -> &'a str {
        match language {
            Language::En => name,
            Language::Kn => translate(DESTINATIONS_KN, name),
            Language::Hi => translate(DESTINATIONS_HI, name),
        }
    }

    fn status(&self, language: Language, status: PaymentStatus) -> &str {
        match (language, status) {
            (Language::En, PaymentStatus::Pending) => "Pending",
            (Language::En, PaymentStatus::Confirmed) => "Confirmed",
            (Language::En, PaymentStatus::Cancelled) => "Cancelled",
            (Language::Kn, PaymentStatus::Pending) => "ಬಾಕಿ",
            (Language::Kn, PaymentStatus::Confirmed) => "ದೃಢೀಕರಿಸಲಾಗಿದೆ",
            (Language::Kn, PaymentStatus::Cancelled) => "ರದ್ದು",
            (Language::Hi, PaymentStatus::Pending) => "लंबित",
            (Language::Hi, PaymentStatus::Confirmed) => "पुष्टि",
            (Language::Hi, PaymentStatus::Cancelled) => "रद्द",
        }
    }
}
