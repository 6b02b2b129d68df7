mod candle_t5_summarizer_test;
