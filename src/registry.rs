use serde::Serialize;

/// One registry entry: display name, exact IBAN length, and the layout rule.
///
/// A layout rule has the shape of a real IBAN: two country-code letters, the
/// two checksum placeholders `pp`, then one role letter per BBAN position,
/// grouped in blocks of four by single spaces (spacing is readability only).
///
/// Role letters:
///   b  bank code digit
///   d  account type digit
///   k  account number digit
///   K  control digit (part of the account number block)
///   r  regional code digit
///   s  branch code digit
///   O  owner number digit
///   X  unspecified/other digit
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountryDefinition {
    pub name: &'static str,
    pub total_length: usize,
    pub layout_rule: &'static str,
}

const fn entry(name: &'static str, total_length: usize, layout_rule: &'static str) -> CountryDefinition {
    CountryDefinition {
        name,
        total_length,
        layout_rule,
    }
}

/// The per-country rule table. Several territories deliberately reuse another
/// country's rule (French overseas territories, UK crown dependencies); the
/// first entry in table order wins prefix lookups.
pub static COUNTRY_DEFINITIONS: &[CountryDefinition] = &[
    entry("Egypt", 27, "EGpp kkkk kkkk kkkk kkkk kkkk kkk"),
    entry("Albania", 28, "ALpp bbbs sssK kkkk kkkk kkkk kkkk"),
    entry("Algeria", 24, "DZpp kkkk kkkk kkkk kkkk kkkk"),
    entry("Andorra", 24, "ADpp bbbb ssss kkkk kkkk kkkk"),
    entry("Angola", 25, "AOpp bbbb ssss kkkk kkkk kkkK K"),
    entry("Azerbaijan", 28, "AZpp bbbb kkkk kkkk kkkk kkkk kkkk"),
    entry("Bahrain", 22, "BHpp bbbb kkkk kkkk kkkk kk"),
    entry("Belgium", 16, "BEpp bbbk kkkk kkKK"),
    entry("Benin", 28, "BJpp bbbb bsss sskk kkkk kkkk kkKK"),
    entry("Bosnia and Herzegovina", 20, "BApp bbbs sskk kkkk kkKK"),
    entry("Brazil", 29, "BRpp bbbb bbbb ssss skkk kkkk kkkd O"),
    entry("British Virgin Islands", 24, "VGpp bbbb kkkk kkkk kkkk kkkk"),
    entry("Bulgaria", 22, "BGpp bbbb ssss ddkk kkkk kk"),
    entry("Burkina Faso", 27, "BFpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Burundi", 16, "BIpp kkkk kkkk kkkk"),
    entry("Costa Rica", 21, "CRpp bbbk kkkk kkkk kkkk k"),
    entry("Ivory Coast", 28, "CIpp bbbb bsss sskk kkkk kkkk kkKK"),
    entry("Denmark", 18, "DKpp bbbb kkkk kkkk kK"),
    entry("Germany", 22, "DEpp bbbb bbbb kkkk kkkk kk"),
    entry("Dominican Republic", 28, "DOpp bbbb kkkk kkkk kkkk kkkk kkkk"),
    entry("Estonia", 20, "EEpp bbkk kkkk kkkk kkkK"),
    entry("Faroe Islands", 18, "FOpp bbbb kkkk kkkk kK"),
    entry("Finland", 18, "FIpp bbbb bbkk kkkk kK"),
    entry("France", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("French Guiana", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("French Polynesia", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("French Southern Territories", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Guadeloupe", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Martinique", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Reunion", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Mayotte", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("New Caledonia", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Saint Barthelemy", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Saint Martin", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Saint Pierre and Miquelon", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Wallis and Futuna", 27, "FRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Gabon", 27, "GApp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Georgia", 22, "GEpp bbkk kkkk kkkk kkkk kk"),
    entry("Gibraltar", 23, "GIpp bbbb kkkk kkkk kkkk kkk"),
    entry("Greece", 27, "GRpp bbbs sssk kkkk kkkk kkkk kkk"),
    entry("Greenland", 18, "GLpp bbbb kkkk kkkk kK"),
    entry("Guatemala", 28, "GTpp bbbb kkkk kkkk kkkk kkkk kkkk"),
    entry("Iran", 26, "IRpp kkkk kkkk kkkk kkkk kkkk kk"),
    entry("Ireland", 22, "IEpp bbbb ssss sskk kkkk kk"),
    entry("Iceland", 26, "ISpp bbbb sskk kkkk XXXX XXXX XX"),
    entry("Israel", 23, "ILpp bbbs sskk kkkk kkkk kkk"),
    entry("Italy", 27, "ITpp Kbbb bbss sssk kkkk kkkk kkk"),
    entry("Jordan", 30, "JOpp bbbb ssss kkkk kkkk kkkk kkkk kk"),
    entry("Cameroon", 27, "CMpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Cape Verde", 25, "CVpp bbbb ssss kkkk kkkk kkkK K"),
    entry("Kazakhstan", 20, "KZpp bbbk kkkk kkkk kkkk"),
    entry("Qatar", 29, "QApp bbbb kkkk kkkk kkkk kkkk kkkk k"),
    entry("Congo (Brazzaville)", 27, "CGpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Kosovo", 20, "XKpp bbbb kkkk kkkk kkkk"),
    entry("Croatia", 21, "HRpp bbbb bbbk kkkk kkkk k"),
    entry("Kuwait", 30, "KWpp bbbb kkkk kkkk kkkk kkkk kkkk kk"),
    entry("Latvia", 21, "LVpp bbbb kkkk kkkk kkkk k"),
    entry("Lebanon", 28, "LBpp bbbb kkkk kkkk kkkk kkkk kkkk"),
    entry("Liechtenstein", 21, "LIpp bbbb bkkk kkkk kkkk k"),
    entry("Lithuania", 20, "LTpp bbbb bkkk kkkk kkkk"),
    entry("Luxembourg", 20, "LUpp bbbk kkkk kkkk kkkk"),
    entry("Madagascar", 27, "MGpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Mali", 28, "MLpp bbbb bsss sskk kkkk kkkk kkKK"),
    entry("Malta", 31, "MTpp bbbb ssss skkk kkkk kkkk kkkk kkk"),
    entry("Mauritania", 27, "MRpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Mauritius", 30, "MUpp bbbb bbss kkkk kkkk kkkk kkkK KK"),
    entry("North Macedonia", 19, "MKpp bbbk kkkk kkkk kKK"),
    entry("Moldova", 24, "MDpp bbkk kkkk kkkk kkkk kkkk"),
    entry("Monaco", 27, "MCpp bbbb bsss sskk kkkk kkkk kKK"),
    entry("Montenegro", 22, "MEpp bbbk kkkk kkkk kkkk KK"),
    entry("Mozambique", 25, "MZpp bbbb ssss kkkk kkkk kkkK K"),
    entry("Netherlands", 18, "NLpp bbbb kkkk kkkk kk"),
    entry("Norway", 15, "NOpp bbbb kkkk kkK"),
    entry("Austria", 20, "ATpp bbbb bkkk kkkk kkkk"),
    entry("East Timor", 23, "TLpp bbbk kkkk kkkk kkkk kKK"),
    entry("Pakistan", 24, "PKpp bbbb rrkk kkkk kkkk kkkk"),
    entry("Palestinian Territories", 29, "PSpp bbbb rrrr rrrr rkkk kkkk kkkk k"),
    entry("Poland", 28, "PLpp bbbs sssK kkkk kkkk kkkk kkkk"),
    entry("Portugal", 25, "PTpp bbbb ssss kkkk kkkk kkkK K"),
    entry("Romania", 24, "ROpp bbbb kkkk kkkk kkkk kkkk"),
    entry("San Marino", 27, "SMpp Kbbb bbss sssk kkkk kkkk kkk"),
    entry("Sao Tome and Principe", 25, "STpp bbbb ssss kkkk kkkk kkkK K"),
    entry("Saudi Arabia", 24, "SApp bbkk kkkk kkkk kkkk kkkk"),
    entry("Sweden", 24, "SEpp bbbk kkkk kkkk kkkk kkkK"),
    entry("Switzerland", 21, "CHpp bbbb bkkk kkkk kkkk k"),
    entry("Senegal", 28, "SNpp bbbb bsss sskk kkkk kkkk kkKK"),
    entry("Serbia", 22, "RSpp bbbk kkkk kkkk kkkk KK"),
    entry("Slovakia", 24, "SKpp bbbb ssss sskk kkkk kkkk"),
    entry("Slovenia", 19, "SIpp bbss skkk kkkk kKK"),
    entry("Spain", 24, "ESpp bbbb ssss KKkk kkkk kkkk"),
    entry("Czech Republic", 24, "CZpp bbbb kkkk kkkk kkkk kkkk"),
    entry("Tunisia", 24, "TNpp bbss skkk kkkk kkkk kkKK"),
    entry("Turkey", 26, "TRpp bbbb brkk kkkk kkkk kkkk kk"),
    entry("Hungary", 28, "HUpp bbbs sssK kkkk kkkk kkkk kkkK"),
    entry("United Arab Emirates", 23, "AEpp bbbk kkkk kkkk kkkk kkk"),
    entry("United Kingdom", 22, "GBpp bbbb ssss sskk kkkk kk"),
    entry("Jersey", 22, "GBpp bbbb ssss sskk kkkk kk"),
    entry("Guernsey", 22, "GBpp bbbb ssss sskk kkkk kk"),
    entry("Isle of Man", 22, "GBpp bbbb ssss sskk kkkk kk"),
    entry("Cyprus", 28, "CYpp bbbs ssss kkkk kkkk kkkk kkkk"),
    entry("Central African Republic", 27, "CFpp bbbb bsss sskk kkkk kkkk kKK"),
];

/// First entry in table order whose layout rule starts with the same two
/// letters as `prefix`.
pub fn lookup_by_prefix(prefix: &str) -> Option<&'static CountryDefinition> {
    let mut chars = prefix.chars();
    let first = chars.next()?;
    let second = chars.next()?;

    COUNTRY_DEFINITIONS.iter().find(|definition| {
        let mut rule = definition.layout_rule.chars();
        rule.next() == Some(first) && rule.next() == Some(second)
    })
}
