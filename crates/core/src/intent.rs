use crate::models::Department;

#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub department: Department,
}

impl KeywordRule {
    pub fn new(department: Department, keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|kw| kw.to_lowercase()).collect(),
            department,
        }
    }

    fn matches(&self, lower: &str) -> bool {
        contains_any(lower, self.keywords.as_slice())
    }
}

#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<KeywordRule>,
    fallback: Department,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self {
            rules: vec![
                KeywordRule::new(
                    Department::UrbanPlanningBuilding,
                    &["bauantrag", "baugenehmigung", "statik"],
                ),
                KeywordRule::new(Department::SocialHousing, &["wohngeld", "miete", "sozialhilfe"]),
                KeywordRule::new(
                    Department::PublicOrderDefects,
                    &["schlagloch", "laterne", "defekt"],
                ),
            ],
            fallback: Department::GeneralService,
        }
    }
}

impl IntentClassifier {
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn classify(&self, text: &str) -> Department {
        let lower = text.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.department)
            .unwrap_or(self.fallback)
    }
}

pub fn classify_department(text: &str) -> Department {
    IntentClassifier::default().classify(text)
}

pub(crate) fn contains_any<S: AsRef<str>>(input: &str, needles: &[S]) -> bool {
    needles.iter().any(|needle| input.contains(needle.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_building_case_insensitively() {
        assert_eq!(
            classify_department("Mein BAUANTRAG vom Mai"),
            Department::UrbanPlanningBuilding
        );
    }

    #[test]
    fn earlier_group_wins_on_overlap() {
        assert_eq!(
            classify_department("Wohngeld und ein Schlagloch vor der Tuer"),
            Department::SocialHousing
        );
        assert_eq!(
            classify_department("Statik fuer die Miete?"),
            Department::UrbanPlanningBuilding
        );
    }

    #[test]
    fn defect_reports_and_fallback() {
        assert_eq!(
            classify_department("Die Laterne ist seit Tagen aus"),
            Department::PublicOrderDefects
        );
        assert_eq!(
            classify_department("Wann hat das Buergeramt geoeffnet?"),
            Department::GeneralService
        );
    }

    #[test]
    fn appended_rules_do_not_shadow_existing_ones() {
        let classifier = IntentClassifier::default()
            .with_rule(KeywordRule::new(Department::GeneralService, &["miete"]));
        assert_eq!(classifier.classify("miete"), Department::SocialHousing);
        assert_eq!(classifier.classify("Kita-Platz"), Department::GeneralService);
    }
}
