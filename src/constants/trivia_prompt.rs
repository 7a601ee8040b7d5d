/// Number of questions requested from the generator per batch.
pub const QUESTIONS_PER_BATCH: usize = 3;

pub const GENERATION_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates trivia questions. Respond with valid JSON.";

/// Categories eligible when the caller does not constrain the request.
pub const DEFAULT_CATEGORIES: [&str; 25] = [
    "Pop Culture",
    "World Cuisine",
    "Strange But True",
    "Legendary Creatures",
    "Internet History",
    "Musical Mashups",
    "Movie Quotes",
    "Hidden Talents of Celebrities",
    "Unusual Inventions",
    "Global Festivals",
    "Ancient Civilizations",
    "Science in Everyday Life",
    "Art Heists",
    "Memes & Viral Moments",
    "Space Oddities",
    "Mythology Mix",
    "Famous Firsts",
    "Fictional Worlds",
    "Historical Underdogs",
    "Language Twists",
    "Tech Through Time",
    "Animal Kingdom Quirks",
    "Sports Scandals",
    "Fashion Through the Ages",
    "Board Games & Beyond",
];

/// Build the user prompt for one generation batch, constrained to the
/// requested categories (or the default list when none are given) and the
/// requested difficulty range.
pub fn build_generation_prompt(
    categories: &[String],
    min_difficulty: i32,
    max_difficulty: i32,
) -> String {
    let category_prompt = if categories.is_empty() {
        format!(
            "Use one of the following categories:\n\n{}",
            DEFAULT_CATEGORIES.join(", ")
        )
    } else {
        format!(
            "Use only the following categories: {}.",
            categories.join(", ")
        )
    };

    format!(
        r#"Generate {count} trivia questions and format the response as JSON.

{category_prompt}

Use a difficulty level between {min} and {max} (inclusive). Ensure the difficulty level is reflected in the complexity of the question and answer choices.

Each trivia question should be returned as an object with the following structure:
- "question": a string containing the question
- "choices": an array of 4 strings labeled "A:" through "D:", randomly ordered
- "answer": a single capital letter string ("A", "B", "C", or "D") representing the correct answer
- "difficulty": an integer between {min} and {max}
- "category": a string from the provided list

Return the trivia questions in the following JSON format:
{{
  "triviaQuestions": [
    {{
      "question": "What was the first video ever uploaded to YouTube?",
      "choices": ["A: Me at the zoo", "B: Charlie bit my finger", "C: The Evolution of Dance", "D: Gangnam Style"],
      "answer": "A",
      "difficulty": 4,
      "category": "Internet History"
    }},
    {{
      "question": "Which mythical creature is said to live beneath Loch Ness in Scotland?",
      "choices": ["A: Kraken", "B: Nessie", "C: Basilisk", "D: Hydra"],
      "answer": "B",
      "difficulty": 7,
      "category": "Legendary Creatures"
    }},
    {{
      "question": "Which planet in our solar system has the most moons?",
      "choices": ["A: Saturn", "B: Jupiter", "C: Uranus", "D: Neptune"],
      "answer": "A",
      "difficulty": 3,
      "category": "Space Oddities"
    }}
  ]
}}"#,
        count = QUESTIONS_PER_BATCH,
        category_prompt = category_prompt,
        min = min_difficulty,
        max = max_difficulty,
    )
}
