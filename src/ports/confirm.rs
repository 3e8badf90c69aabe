pub trait DeletionConfirmer {
    /// Returns true when the listed profiles may be removed.
    fn confirm(&mut self, rendered_names: &[String]) -> bool;
}
