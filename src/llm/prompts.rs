pub const SUMMARY_INSTRUCTIONS: &str =
    "Generate a PR title and description (format the description in markdown) based on the \
     following branch name and commit messages with diffs. Include JIRA ticket information \
     if provided. **Be concise.**";
