mod observability;
mod summarization;
