// Message catalogs keyed by validation message key

pub(super) const GERMAN: &[(&str, &str)] = &[
    ("NotNull", "Dieses Feld ist ein Pflichtfeld!"),
    ("NotBlank", "Dieses Feld darf nicht leer sein!"),
    ("Alphabetic", "Dieses Feld darf nur Buchstaben enthalten!"),
    ("AlphaNumeric", "Dieses Feld darf nur Buchstaben und Zahlen enthalten!"),
    ("Pattern.firstName", "Bitte geben Sie einen gültigen Vornamen ein!"),
    ("Pattern.lastName", "Bitte geben Sie einen gültigen Nachnamen ein!"),
    ("Pattern.city", "Bitte geben Sie eine gültige Stadt ein!"),
    ("Pattern.street", "Bitte geben Sie eine gültige Straße ein!"),
    ("Pattern.phone", "Bitte geben Sie eine gültige Telefonnummer ein!"),
    ("Pattern.zipCode", "Bitte geben Sie eine gültige Postleitzahl mit fünf Ziffern ein!"),
    ("Email", "Bitte geben Sie eine gültige E-Mail-Adresse ein!"),
    ("Date", "Bitte geben Sie ein gültiges Datum im Format JJJJ-MM-TT ein!"),
    ("Past", "Das Datum muss in der Vergangenheit liegen!"),
    ("Boolean", "Bitte geben Sie für dieses Feld ja oder nein an!"),
    ("Text", "Dieses Feld muss ein Text sein!"),
    (
        "ContactWays",
        "Bitte geben Sie mindestens eine Kontaktmöglichkeit (Telefon, Mobiltelefon, E-Mail) oder einen Hinweis zur Identifikation an!",
    ),
    ("TrackedCase.phoneOrMobile", "Bitte geben Sie eine Telefon- oder Mobilnummer an!"),
    (
        "TrackedCase.quarantineEndBeforeStart",
        "Das Ende der Quarantäne darf nicht vor ihrem Beginn liegen!",
    ),
    (
        "TrackedCase.enrollmentCompleted",
        "Nach abgeschlossener Registrierung ist dieses Feld ein Pflichtfeld!",
    ),
];

pub(super) const ENGLISH: &[(&str, &str)] = &[
    ("NotNull", "This field is required!"),
    ("NotBlank", "This field must not be empty!"),
    ("Alphabetic", "This field may only contain letters!"),
    ("AlphaNumeric", "This field may only contain letters and digits!"),
    ("Pattern.firstName", "Please enter a valid first name!"),
    ("Pattern.lastName", "Please enter a valid last name!"),
    ("Pattern.city", "Please enter a valid city!"),
    ("Pattern.street", "Please enter a valid street!"),
    ("Pattern.phone", "Please enter a valid phone number!"),
    ("Pattern.zipCode", "Please enter a valid five digit zip code!"),
    ("Email", "Please enter a valid email address!"),
    ("Date", "Please enter a valid date in the format YYYY-MM-DD!"),
    ("Past", "The date must lie in the past!"),
    ("Boolean", "Please answer this field with yes or no!"),
    ("Text", "This field must be text!"),
    (
        "ContactWays",
        "Please provide at least one way of contact (phone, mobile phone, email) or a hint for identification!",
    ),
    ("TrackedCase.phoneOrMobile", "Please provide a phone or mobile phone number!"),
    (
        "TrackedCase.quarantineEndBeforeStart",
        "The end of the quarantine must not lie before its start!",
    ),
    (
        "TrackedCase.enrollmentCompleted",
        "This field is required once the enrollment is completed!",
    ),
];
