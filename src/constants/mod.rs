pub mod trivia_prompt;
