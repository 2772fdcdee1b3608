/// Anything [`rank()`](crate::ranking::rank) can order by its text.
pub trait RankedText {
    fn ranked_text(&self) -> &str;
}
impl RankedText for &str {
    fn ranked_text(&self) -> &str {
        self
    }
}
impl RankedText for String {
    fn ranked_text(&self) -> &str {
        self.as_str()
    }
}
