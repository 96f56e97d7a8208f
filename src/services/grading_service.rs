use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{quiz_answer::UNANSWERED, GradeReport, QuizAnswerRecord, QuizQuestion},
        dto::request::QuizResultRequest,
    },
};

/// Rounded percentage of correct answers. Fails on an empty quiz.
pub fn score_percent(correct: usize, total: usize) -> AppResult<u32> {
    if total == 0 {
        return Err(AppError::InvalidArgumentError(
            "cannot score a quiz with no questions".to_string(),
        ));
    }
    Ok((100.0 * correct as f64 / total as f64).round() as u32)
}

/// Grades `user_answers` positionally against `questions`.
///
/// A missing entry, `None` or `-1` counts as unanswered. Any other value must
/// be a valid choice index for its question.
pub fn grade(questions: &[QuizQuestion], user_answers: &[Option<i32>]) -> AppResult<GradeReport> {
    if questions.is_empty() {
        return Err(AppError::InvalidArgumentError(
            "cannot grade a quiz with no questions".to_string(),
        ));
    }
    if user_answers.len() > questions.len() {
        return Err(AppError::InvalidArgumentError(format!(
            "received {} answers for {} questions",
            user_answers.len(),
            questions.len()
        )));
    }

    let mut records = Vec::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        let user_answer = user_answers
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(UNANSWERED);

        if user_answer != UNANSWERED && !question.is_valid_choice(user_answer) {
            return Err(AppError::InvalidArgumentError(format!(
                "answer {} is not a choice of question {}",
                user_answer, question.id
            )));
        }

        records.push(QuizAnswerRecord {
            question_id: question.id,
            user_answer,
            correct_answer: question.answer,
            is_correct: user_answer == question.answer,
            explanation: question.explanation.clone(),
        });
    }

    let correct_count = records.iter().filter(|r| r.is_correct).count();
    let score_percent = score_percent(correct_count, records.len())?;

    log::debug!(
        "Graded quiz: {}/{} correct ({}%)",
        correct_count,
        records.len(),
        score_percent
    );

    Ok(GradeReport {
        records,
        correct_count,
        score_percent,
    })
}

impl From<&GradeReport> for QuizResultRequest {
    fn from(report: &GradeReport) -> Self {
        QuizResultRequest {
            answers: report.records.clone(),
            total_questions: report.total_questions() as u32,
            correct_answers: report.correct_count as u32,
            score: report.score_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::questions_with_answers;

    #[test]
    fn grade_empty_quiz_is_invalid_argument() {
        let result = grade(&[], &[]);
        assert!(matches!(result, Err(AppError::InvalidArgumentError(_))));
    }

    #[test]
    fn grade_counts_correct_answers_and_rounds() {
        let questions = questions_with_answers(&[1, 2, 0]);

        let report = grade(&questions, &[Some(1), Some(-1), Some(0)]).unwrap();

        assert_eq!(report.correct_count, 2);
        assert_eq!(report.score_percent, 67);
        assert_eq!(report.records[1].user_answer, UNANSWERED);
        assert!(!report.records[1].is_correct);
    }

    #[test]
    fn grade_treats_missing_and_null_as_unanswered() {
        let questions = questions_with_answers(&[0, 1, 2]);

        let report = grade(&questions, &[None, Some(1)]).unwrap();

        assert_eq!(report.records[0].user_answer, UNANSWERED);
        assert_eq!(report.records[2].user_answer, UNANSWERED);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.score_percent, 33);
    }

    #[test]
    fn grade_first_choice_is_a_real_answer() {
        let questions = questions_with_answers(&[0]);

        let report = grade(&questions, &[Some(0)]).unwrap();

        assert_eq!(report.correct_count, 1);
        assert_eq!(report.score_percent, 100);
    }

    #[test]
    fn grade_records_keep_invariants() {
        let questions = questions_with_answers(&[3, 2, 1, 0]);

        let report = grade(&questions, &[Some(3), Some(0), None, Some(0)]).unwrap();

        for (record, question) in report.records.iter().zip(&questions) {
            assert_eq!(record.question_id, question.id);
            assert_eq!(record.correct_answer, question.answer);
            assert_eq!(record.is_correct, record.user_answer == record.correct_answer);
        }
        assert_eq!(report.correct_count, 2);
        assert_eq!(report.score_percent, 50);
    }

    #[test]
    fn grade_rejects_out_of_range_answer() {
        let questions = questions_with_answers(&[1]);

        assert!(matches!(
            grade(&questions, &[Some(4)]),
            Err(AppError::InvalidArgumentError(_))
        ));
        assert!(matches!(
            grade(&questions, &[Some(-2)]),
            Err(AppError::InvalidArgumentError(_))
        ));
    }

    #[test]
    fn grade_rejects_extra_answers() {
        let questions = questions_with_answers(&[1]);

        let result = grade(&questions, &[Some(1), Some(0)]);
        assert!(matches!(result, Err(AppError::InvalidArgumentError(_))));
    }

    #[test]
    fn score_percent_rounds_half_up() {
        assert_eq!(score_percent(1, 8).unwrap(), 13);
        assert_eq!(score_percent(0, 5).unwrap(), 0);
        assert_eq!(score_percent(5, 5).unwrap(), 100);
        assert!(score_percent(0, 0).is_err());
    }

    #[test]
    fn grading_request_mirrors_report() {
        let questions = questions_with_answers(&[1, 2, 0]);
        let report = grade(&questions, &[Some(1), Some(-1), Some(0)]).unwrap();

        let request = QuizResultRequest::from(&report);

        assert_eq!(request.total_questions, 3);
        assert_eq!(request.correct_answers, 2);
        assert_eq!(request.score, 67);
        assert_eq!(request.answers, report.records);
    }
}
