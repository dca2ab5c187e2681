// Narrative template variants. Placeholders are `{name}` and are filled by
// `render`. Every variant of one message uses the same placeholders.

// ── degree ─────────────────────────────────────────────────────────────────

pub const DEGREE_FAR_ABOVE: &[&str] = &[
    "The candidate's {candidate} significantly exceeds the {job} requirement ({score}%).",
    "With a {candidate}, the candidate is well beyond the required {job} ({score}%).",
    "The {candidate} held by the candidate is a substantially higher qualification than the requested {job} ({score}%).",
];

pub const DEGREE_ABOVE: &[&str] = &[
    "The candidate's {candidate} exceeds the {job} requirement ({score}%).",
    "Holding a {candidate}, the candidate is more qualified than the required {job} ({score}%).",
    "The {candidate} is a step above the requested {job} ({score}%).",
];

pub const DEGREE_MEETS: &[&str] = &[
    "The candidate's {candidate} meets the {job} requirement ({score}%).",
    "The {candidate} is an appropriate match for the required {job} ({score}%).",
    "The candidate's {candidate} aligns with the requested {job} ({score}%).",
];

pub const DEGREE_SLIGHTLY_BELOW: &[&str] = &[
    "The candidate's {candidate} is slightly below the {job} requirement ({score}%).",
    "The {candidate} falls just short of the required {job} ({score}%).",
    "The candidate's {candidate} nearly meets the requested {job} ({score}%).",
];

pub const DEGREE_BELOW: &[&str] = &[
    "The candidate's {candidate} is below the {job} requirement ({score}%).",
    "The {candidate} does not reach the level of the required {job} ({score}%).",
    "The candidate's {candidate} falls short of the requested {job} ({score}%).",
];

pub const DEGREE_FAR_BELOW: &[&str] = &[
    "The candidate's {candidate} is substantially below the {job} requirement ({score}%).",
    "The {candidate} is well short of the required {job} ({score}%).",
    "There is a significant gap between the candidate's {candidate} and the requested {job} ({score}%).",
];

pub const DEGREE_LIST_BEST: &[&str] = &[
    "Of the {count} degrees provided, {best} is the strongest match for the {job} requirement ({score}%).",
    "The best match for the {job} requirement among {count} degrees is {best} ({score}%).",
];

pub const DEGREE_LIST_EMPTY: &[&str] = &[
    "No candidate degrees were provided for the {job} requirement.",
];

// ── major ──────────────────────────────────────────────────────────────────

pub const MAJOR_EXCELLENT: &[&str] = &[
    "The candidate's major in {candidate} is an excellent match for {job} ({score}%); these are {relationship}.",
    "{candidate} and {job} are {relationship}, giving an excellent field-of-study match ({score}%).",
    "The candidate's background in {candidate} aligns very closely with {job} ({score}%).",
];

pub const MAJOR_STRONG: &[&str] = &[
    "The candidate's major in {candidate} is a strong match for {job} ({score}%); these are {relationship}.",
    "{candidate} shares substantial ground with {job} ({score}%).",
    "The candidate's study of {candidate} provides a strong foundation for {job} ({score}%).",
];

pub const MAJOR_GOOD: &[&str] = &[
    "The candidate's major in {candidate} is a good match for {job} ({score}%).",
    "{candidate} overlaps meaningfully with {job} ({score}%).",
    "The candidate's {candidate} background is reasonably aligned with {job} ({score}%).",
];

pub const MAJOR_PARTIAL: &[&str] = &[
    "The candidate's major in {candidate} is partially related to {job} ({score}%).",
    "{candidate} has some overlap with {job}, though the fields differ ({score}%).",
    "The candidate's {candidate} background only partly covers {job} ({score}%).",
];

pub const MAJOR_WEAK: &[&str] = &[
    "The candidate's major in {candidate} has limited relevance to {job} ({score}%).",
    "{candidate} and {job} are {relationship} ({score}%).",
    "The candidate's {candidate} background does not align with {job} ({score}%).",
];

pub const MAJOR_LIST_BEST: &[&str] = &[
    "Of the {count} majors provided, {best} is the closest to {job} ({score}%).",
    "The closest field of study to {job} among {count} majors is {best} ({score}%).",
];

pub const MAJOR_LIST_EMPTY: &[&str] = &[
    "No candidate majors were provided for comparison with {job}.",
];

// ── skills ─────────────────────────────────────────────────────────────────

pub const SKILLS_SUMMARY: &[&str] = &[
    "The candidate matches {percentage}% of the required skills.",
    "Skill coverage against the job requirements is {percentage}%.",
    "Overall, the candidate's skills meet {percentage}% of what the role asks for.",
];

pub const SKILLS_EXACT: &[&str] = &[
    "Direct matches: {skills}.",
    "The candidate has the following required skills: {skills}.",
];

pub const SKILLS_RELATED: &[&str] = &[
    "Related experience: {skills}.",
    "The candidate has closely related skills for: {skills}.",
];

pub const SKILLS_MISSING: &[&str] = &[
    "Not demonstrated: {skills}.",
    "The candidate shows no clear evidence of: {skills}.",
];

pub const SKILLS_ADDITIONAL: &[&str] = &[
    "Additional relevant skills: {skills}.",
    "The candidate also brings: {skills}.",
];

pub const SKILLS_NONE_REQUIRED: &[&str] = &[
    "No job skills were provided, so no skill match was computed.",
];

// ── projects ───────────────────────────────────────────────────────────────

pub const PROJECTS_SUMMARY: &[&str] = &[
    "Project experience scores {score}% across {count} project(s); the strongest is {best} ({best_score}%).",
    "Across {count} project(s), project relevance is {score}%, led by {best} at {best_score}%.",
];

pub const PROJECTS_DOMAIN: &[&str] = &[
    "{aligned} project(s) fall in the same {domain} domain as the role.",
    "The role's {domain} focus is reflected in {aligned} of the candidate's projects.",
];

pub const PROJECTS_NONE: &[&str] = &[
    "No projects were provided, so project experience could not be assessed.",
    "Project experience was not assessed because no projects were listed.",
];

// ── overall ────────────────────────────────────────────────────────────────

pub const OVERALL_INTRO: &[&str] = &[
    "The candidate demonstrates a {strength} overall match of {score}% based on combined assessment across education and experience.",
    "With an overall score of {score}%, the candidate shows {strength} alignment with the position requirements.",
    "Comprehensive evaluation of the candidate yields a {strength} overall match ({score}%) with the job requirements.",
];

pub const OVERALL_STRENGTH: &[&str] = &[
    "The candidate's greatest strength is their {component} with a score of {score}%.",
    "Most notable is the candidate's {score}% score in {component}.",
    "The candidate particularly excels in {component} ({score}%).",
];

pub const OVERALL_CONCERN: &[&str] = &[
    "The candidate's {component} is notably weaker at {score}%, which may require attention.",
    "An area of potential concern is the candidate's {component} score of {score}%.",
    "The candidate's {component} ({score}%) may need supplementary assessment.",
];

pub const CLOSING_EXCEPTIONAL: &[&str] = &[
    "Overall, the candidate presents an exceptional match for this position across multiple dimensions.",
    "This candidate demonstrates remarkable alignment with the position requirements.",
];

pub const CLOSING_STRONG: &[&str] = &[
    "Overall, the candidate presents a strong match with notable strengths in multiple areas.",
    "The candidate's profile suggests they would perform well in this role.",
];

pub const CLOSING_GOOD: &[&str] = &[
    "Overall, the candidate presents a good match with particular strengths in some areas.",
    "The candidate has good potential for the position with appropriate onboarding.",
];

pub const CLOSING_MODERATE: &[&str] = &[
    "Overall, the candidate presents a moderate match with mixed strengths and weaknesses.",
    "Some areas would need significant development, but there is potential for growth.",
];

pub const CLOSING_WEAK: &[&str] = &[
    "Overall, the candidate's profile shows limited alignment with this position.",
    "Substantial gaps remain between the candidate's profile and the role.",
];

pub const RECOMMEND_STRONGLY: &str =
    "RECOMMENDATION: This candidate is strongly recommended for interview based on their comprehensive evaluation.";
pub const RECOMMEND: &str =
    "RECOMMENDATION: This candidate is recommended for interview to further assess their fit and capabilities.";
pub const RECOMMEND_CONSIDER: &str =
    "RECOMMENDATION: Consider interviewing this candidate if stronger alternatives are not available, with focus on addressing identified gaps.";
pub const RECOMMEND_NOT: &str =
    "RECOMMENDATION: This candidate may not be the best fit based on their comprehensive evaluation. Consider alternative candidates.";
