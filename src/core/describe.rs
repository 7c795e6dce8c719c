/// Turn a label list into a single human-readable sentence.
pub fn describe_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        "No clear objects detected in this image.".to_string()
    } else {
        format!("This image contains: {}.", labels.join(", "))
    }
}
