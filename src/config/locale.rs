use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
}

#[derive(Debug, Clone, Copy)]
pub struct Columns {
    pub country: &'static str,
    pub gold: &'static str,
    pub silver: &'static str,
    pub bronze: &'static str,
    pub total: &'static str,
    pub weighted_score: &'static str,
    pub rank_by_medals: &'static str,
    pub rank_by_weighted_score: &'static str,
    pub rank_change: &'static str,
}

/// Display strings and source page for one language.
#[derive(Debug, Clone, Copy)]
pub struct Translations {
    pub data_url: &'static str,
    pub page_title: &'static str,
    pub last_updated: &'static str,
    pub medals_explanation: &'static str,
    pub error_parsing: &'static str,
    pub failed_retrieve: &'static str,
    pub sorted_by_medals: &'static str,
    pub sorted_by_weighted_score: &'static str,
    pub rank_change: &'static str,
    pub columns: Columns,
}

const ENGLISH: Translations = Translations {
    data_url: "https://olympics.com/en/paris-2024/medals",
    page_title: "Olympics Ranking",
    last_updated: "Last Updated",
    medals_explanation: "The Weighted Gold Score gives a more balanced ranking by considering \
        the relative value of each medal type:\n  \
        Weighted Gold Score = Gold Medals + Silver Medals / 2 + Bronze Medals / 3",
    error_parsing: "Error parsing element:",
    failed_retrieve: "Failed to retrieve the webpage. Status code:",
    sorted_by_medals: "Sorted by Number of Medals",
    sorted_by_weighted_score: "Sorted by Weighted Gold Score",
    rank_change: "Rank Change from Medals to Weighted Score",
    columns: Columns {
        country: "Country",
        gold: "Gold Medals",
        silver: "Silver Medals",
        bronze: "Bronze Medals",
        total: "Total Medals",
        weighted_score: "Weighted Gold Score",
        rank_by_medals: "Rank by Medals",
        rank_by_weighted_score: "Rank by Weighted Score",
        rank_change: "Rank Change",
    },
};

const FRENCH: Translations = Translations {
    data_url: "https://olympics.com/fr/paris-2024/medailles",
    page_title: "Classement Olympique",
    last_updated: "Dernière mise à jour",
    medals_explanation: "Le score en or pondéré fournit un classement plus équilibré en \
        considérant la valeur relative de chaque type de médaille :\n  \
        Score en or pondéré = Médailles d'or + Médailles d'argent / 2 + Médailles de bronze / 3",
    error_parsing: "Erreur lors de l'analyse de l'élément :",
    failed_retrieve: "Échec de la récupération de la page Web. Code de statut :",
    sorted_by_medals: "Trié par nombre de médailles",
    sorted_by_weighted_score: "Trié par score en or pondéré",
    rank_change: "Changement de classement des médailles au score pondéré",
    columns: Columns {
        country: "Pays",
        gold: "Médailles d'or",
        silver: "Médailles d'argent",
        bronze: "Médailles de bronze",
        total: "Total des médailles",
        weighted_score: "Score en or pondéré",
        rank_by_medals: "Rang par médailles",
        rank_by_weighted_score: "Rang par score pondéré",
        rank_change: "Changement de rang",
    },
};

impl Locale {
    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => &ENGLISH,
            Locale::Fr => &FRENCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_locale_points_at_its_own_page() {
        assert!(Locale::En.translations().data_url.contains("/en/"));
        assert!(Locale::Fr.translations().data_url.contains("/fr/"));
    }

    #[test]
    fn french_columns_are_translated() {
        let columns = Locale::Fr.translations().columns;
        assert_eq!(columns.country, "Pays");
        assert_eq!(columns.rank_change, "Changement de rang");
    }
}
