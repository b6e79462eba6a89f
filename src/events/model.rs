/// A single upcoming appearance, as rendered on the teaching page.
///
/// `date` is free text taken from the source (possibly empty); no parsing or
/// ordering is attempted. `location` is fixed per venue. Duplicates across
/// runs or sources are possible and accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub location: String,
    pub url: String,
}

#[derive(strum::IntoStaticStr, Debug, Clone, Copy)]
pub enum Venue {
    Esalen,
    #[strum(serialize = "SF Dharma Collective")]
    DharmaCollective,
}
