//! Built-in prompt templates, keyed by language, group and key.
//!
//! Placeholders use `$name` or `${name}`; `$$` renders a literal dollar sign.

pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "ar"];

pub fn has_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

pub fn lookup(language: &str, group: &str, key: &str) -> Option<&'static str> {
    match (language, group) {
        ("en", "rag") => en_rag(key),
        ("ar", "rag") => ar_rag(key),
        _ => None,
    }
}

fn en_rag(key: &str) -> Option<&'static str> {
    match key {
        "system_prompt" => Some(concat!(
            "You are an assistant that answers the user's question.\n",
            "You will be given a set of documents related to the question.\n",
            "Base your answer only on the documents provided and ignore any that are not relevant.\n",
            "If the documents do not contain the answer, apologize to the user.\n",
            "Reply in the same language as the user's question.\n",
            "Be polite, precise and concise."
        )),
        "document_prompt" => Some("## Document No: $doc_num\n### Content: $chunk_text"),
        "footer_prompt" => Some(concat!(
            "Based only on the above documents, please generate an answer for the user.\n",
            "## Question:\n",
            "$query\n\n",
            "## Answer:"
        )),
        _ => None,
    }
}

fn ar_rag(key: &str) -> Option<&'static str> {
    match key {
        "system_prompt" => Some(concat!(
            "أنت مساعد تجيب عن سؤال المستخدم.\n",
            "سيتم تزويدك بمجموعة من المستندات المرتبطة بالسؤال.\n",
            "اعتمد في إجابتك على المستندات المقدمة فقط وتجاهل ما ليس له صلة بالسؤال.\n",
            "إذا لم تتضمن المستندات الإجابة فاعتذر للمستخدم.\n",
            "أجب بنفس لغة سؤال المستخدم.\n",
            "كن مهذبا ودقيقا وموجزا."
        )),
        "document_prompt" => Some("## رقم المستند: $doc_num\n### المحتوى: $chunk_text"),
        "footer_prompt" => Some(concat!(
            "بناء على المستندات أعلاه فقط، يرجى توليد إجابة للمستخدم.\n",
            "## السؤال:\n",
            "$query\n\n",
            "## الإجابة:"
        )),
        _ => None,
    }
}
