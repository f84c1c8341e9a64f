use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Known author spellings and the name each should be credited under.
///
/// Mixes git log clean-ups (mojibake, nicknames, placeholder identities)
/// with name changes requested by the authors themselves.
pub const AUTHOR_ALIASES: &[(&str, &str)] = &[
    ("Aaron", "Aaron Carlisle"),
    ("Your Name", "Aaron Carlisle"),
    ("Alan", "Alan Troth"),
    ("andreas atteneder", "Andreas Atteneder"),
    ("Ankit", "Ankit Meel"),
    ("Antonioya", "Antonio Vazquez"),
    ("Antonio  Vazquez", "Antonio Vazquez"),
    ("Antony Ryakiotakis", "Antony Riakiotakis"),
    ("bastien", "Bastien Montagne"),
    ("mont29", "Bastien Montagne"),
    ("bjornmose", "Bjorn Mose"),
    ("meta-androcto", "Brendon Murphy"),
    ("Brecht van Lommel", "Brecht Van Lommel"),
    ("Brecht Van Lömmel", "Brecht Van Lommel"),
    ("ClÃ©ment Foucault", "Clément Foucault"),
    ("Clément", "Clément Foucault"),
    ("fclem", "Clément Foucault"),
    ("christian brinkmann", "Christian Brinkmann"),
    ("ZanQdo", "Daniel Salazar"),
    ("unclezeiv", "Davide Vercelli"),
    ("gaiaclary", "Gaia Clary"),
    ("Diego Hernan Borghetti", "Diego Borghetti"),
    ("Dotsnov Valentin", "Dontsov Valentin"),
    ("Eitan", "Eitan Traurig"),
    ("EitanSomething", "Eitan Traurig"),
    ("Germano", "Germano Cavalcante"),
    ("Germano Cavalcantemano-wii", "Germano Cavalcante"),
    ("mano-wii", "Germano Cavalcante"),
    ("gsr", "Guillermo S. Romero"),
    ("howardt", "Howard Trickey"),
    ("Inês Almeida", "Ines Almeida"),
    ("brita", "Ines Almeida"),
    ("Ivan", "Ivan Perevala"),
    ("jensverwiebe", "Jens Verwiebe"),
    ("julianeisel", "Julian Eisel"),
    ("Severin", "Julian Eisel"),
    ("Alex Strand", "Kenzie Strand"),
    ("Kevin Dietrich", "Kévin Dietrich"),
    ("Mikhail", "Mikhail Matrosov"),
    ("lazydodo", "Ray Molenkamp"),
    ("Ray molenkamp", "Ray Molenkamp"),
    ("Author Name", "Robert Guetzkow"),
    ("Sybren A. St\u{c3}\u{83}\u{c2}\u{bc}vel", "Sybren A. St\u{fc}vel"),
    ("Simon", "Simon G"),
    ("Stephan", "Stephan Seitz"),
    ("blender", "Sergey Sharybin"),
    ("Vuk GardaÅ¡eviÄ\u{87}", "Vuk Gardašević"),
    ("ianwill", "Willian Padovani Germano"),
];

/// Canonical (NFC) form of `name`.
pub fn nfc(name: &str) -> String {
    name.nfc().collect()
}

/// Maps raw git author strings to the display name they are credited under.
#[derive(Debug, Clone)]
pub struct AuthorNormalizer {
    aliases: HashMap<String, String>,
}

impl AuthorNormalizer {
    /// Normalizer backed by [`AUTHOR_ALIASES`] only.
    pub fn new() -> Self {
        Self::with_aliases(std::iter::empty::<(String, String)>())
    }

    /// Normalizer backed by [`AUTHOR_ALIASES`] plus `extra`; entries in
    /// `extra` win over built-in ones with the same key.
    pub fn with_aliases<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut aliases: HashMap<String, String> = AUTHOR_ALIASES
            .iter()
            .map(|(raw, canonical)| (nfc(raw), nfc(canonical)))
            .collect();
        for (raw, canonical) in extra {
            aliases.insert(nfc(raw.as_ref()), nfc(canonical.as_ref()));
        }
        Self { aliases }
    }

    /// Resolve `raw` to its canonical display name.
    ///
    /// Composition is normalized before the alias lookup so that
    /// decomposed and precomposed spellings hit the same entry.
    pub fn canonical(&self, raw: &str) -> String {
        let normalized = nfc(raw);
        match self.aliases.get(&normalized) {
            Some(canonical) => canonical.clone(),
            None => normalized,
        }
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for AuthorNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
