use super::*;

impl<S: Storage> ProgressStore<S> {
    /// Replaces the preferences wholesale and persists.
    pub fn update_preferences(&mut self, preferences: UserPreferences) -> Result<(), StorageError> {
        self.progress.preferences = preferences;
        self.persist()
    }

    /// Adding a category already in the set changes nothing.
    pub fn add_favorite_category(&mut self, category: QuizCategory) -> Result<(), StorageError> {
        if self.progress.favorite_categories.contains(&category) {
            return Ok(());
        }
        self.progress.favorite_categories.push(category);
        self.persist()
    }

    pub fn remove_favorite_category(&mut self, category: QuizCategory) -> Result<(), StorageError> {
        self.progress.favorite_categories.retain(|c| *c != category);
        self.persist()
    }

    /// Wipes all history and derived state and persists the empty store.
    /// Irreversible.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.progress = UserProgress::default();
        self.persist()
    }
}
