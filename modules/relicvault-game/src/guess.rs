/// Lenient name match: case- and whitespace-insensitive, accepting either
/// string containing the other. Tolerates both abbreviation ("knife") and
/// elaboration ("the poop knife story"). A guess that normalizes to the
/// empty string never matches — it would otherwise match every name.
pub fn matches(guess: &str, name: &str) -> bool {
    let guess = guess.trim().to_lowercase();
    let name = name.trim().to_lowercase();
    if guess.is_empty() || name.is_empty() {
        return false;
    }
    guess.contains(&name) || name.contains(&guess)
}
