use super::*;
use crate::model::Category;
use crate::view_models::review_rows;

impl QuizApp {
    pub fn results_summary(&self) -> ResultsSummary {
        ResultsSummary::from_session(&self.session)
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        review_rows(&self.session)
    }

    pub fn progress_card(&self) -> ProgressCard {
        ProgressCard::from_session(&self.session)
    }

    /// Consejos agrupados por categoría, en el orden de las categorías.
    pub fn tips_by_category(&self) -> Vec<(Category, Vec<&Tip>)> {
        Category::ALL
            .iter()
            .map(|cat| (*cat, self.tips.iter().filter(|t| t.category == *cat).collect::<Vec<_>>()))
            .filter(|(_, tips)| !tips.is_empty())
            .collect()
    }
}
