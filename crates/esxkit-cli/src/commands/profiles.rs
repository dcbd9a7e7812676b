use esxkit_profile::builtin_profiles;

pub fn run() {
    for profile in builtin_profiles() {
        println!("{}", profile.name);
        if !profile.required_tag_keys.is_empty() {
            println!("  required tags: {}", profile.required_tag_keys.join(", "));
        }
        if !profile.optional_tag_keys.is_empty() {
            println!("  optional tags: {}", profile.optional_tag_keys.join(", "));
        }
        if let Some(expectation) = &profile.coverage_expectation {
            println!("  expected coverage requirement: {}", expectation.name);
        }
    }
}
