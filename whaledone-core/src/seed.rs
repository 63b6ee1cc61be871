//! Sample records every session starts from.
//!
//! There is no backend yet, so each screen is populated from these fixtures.

use crate::insights::Insights;
use crate::models::{
    Contact, KeywordCount, MessageStats, MonthlyCount, Notification, NotificationKind, ReceivedMessage, Reply,
    SentMessage, Sentiment, UserProfile,
};

fn contact(
    id: &str,
    name: &str,
    role: &str,
    company: &str,
    avatar: &str,
    registered: bool,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        avatar: avatar.to_string(),
        registered,
        phone: None,
        group: None,
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        contact("1", "Sarah Kim", "Product Designer", "Design Co", "👩‍💼", true),
        contact("2", "Mike Chen", "Developer", "Tech Inc", "👨‍💻", true),
        contact("3", "Emily Park", "Marketing Manager", "Brand Co", "👩‍💼", true),
        contact("4", "John Doe", "Sales Director", "Sales Corp", "👨‍💼", true),
        contact("5", "Lisa Wang", "HR Manager", "People Co", "👩", false),
        contact("6", "Tom Brown", "Engineer", "Build Inc", "👨‍🔧", false),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn received(
    id: &str,
    preview: &str,
    content: &str,
    age: &str,
    locked: bool,
    has_replied: bool,
    sentiment: Sentiment,
    keywords: &[&str],
    category: &str,
) -> ReceivedMessage {
    ReceivedMessage {
        id: id.to_string(),
        preview: preview.to_string(),
        content: content.to_string(),
        age: age.to_string(),
        locked,
        read: false,
        has_replied,
        stats: MessageStats {
            sentiment,
            keywords: strings(keywords),
            length: content.chars().count() as u32,
            category: category.to_string(),
        },
    }
}

pub fn received_messages() -> Vec<ReceivedMessage> {
    vec![
        received(
            "1",
            "항상 긍정적인 에너지...",
            "항상 팀 미팅에서 긍정적인 에너지를 전달해주셔서 감사해요!",
            "2일 전",
            false,
            false,
            Sentiment::VeryPositive,
            &["긍정적", "에너지", "팀워크"],
            "협업",
        ),
        received(
            "2",
            "정말 감사합니다...",
            "어제 프로젝트 도와주셔서 감사합니다. 전문성 덕분에 큰 도움이 되었어요.",
            "5일 전",
            false,
            false,
            Sentiment::Positive,
            &["전문성", "도움", "프로젝트"],
            "업무",
        ),
        received(
            "3",
            "문제 해결 방식이...",
            "문제 해결 방식이 정말 우아합니다. 계속 멋진 모습 보여주세요!",
            "1주일 전",
            false,
            true,
            Sentiment::VeryPositive,
            &["문제 해결", "우아함", "전문성"],
            "업무",
        ),
        received(
            "4",
            "누군가가 메시지를...",
            "창의적인 솔루션은 항상 프로젝트에 새로운 관점을 제공합니다. 훌륭한 일입니다!",
            "2주일 전",
            true,
            false,
            Sentiment::VeryPositive,
            &["창의성", "솔루션", "프로젝트"],
            "업무",
        ),
        received(
            "5",
            "새로운 메시지가...",
            "세심한 디테일이 큰 차이를 만듭니다. 헌신에 감사드립니다!",
            "3주일 전",
            true,
            false,
            Sentiment::Positive,
            &["디테일", "헌신", "감사"],
            "업무",
        ),
    ]
}

fn reply(
    id: &str,
    content: &str,
    age: &str,
    locked: bool,
) -> Reply {
    Reply {
        id: id.to_string(),
        content: content.to_string(),
        age: age.to_string(),
        locked,
    }
}

pub fn sent_messages() -> Vec<SentMessage> {
    vec![
        SentMessage {
            id: "1".to_string(),
            content: "항상 팀 미팅에서 긍정적인 에너지를 전달해주셔서 감사해요!".to_string(),
            recipient_name: "Sarah Kim".to_string(),
            age: "2일 전".to_string(),
            replies: vec![reply(
                "r1",
                "정말 감사합니다! 이런 말씀 들으니 힘이 나네요.",
                "1일 전",
                true,
            )],
        },
        SentMessage {
            id: "2".to_string(),
            content: "어제 프로젝트 도와주셔서 감사합니다. 전문성 덕분에 큰 도움이 되었어요."
                .to_string(),
            recipient_name: "Mike Chen".to_string(),
            age: "5일 전".to_string(),
            replies: vec![
                reply(
                    "r2",
                    "천만에요! 함께 작업할 수 있어서 저도 좋았습니다.",
                    "4일 전",
                    false,
                ),
                reply("r3", "앞으로도 잘 부탁드립니다!", "4일 전", true),
            ],
        },
        SentMessage {
            id: "3".to_string(),
            content: "브레인스토밍 세션에서의 창의적인 아이디어는 항상 영감을 줍니다!".to_string(),
            recipient_name: "Emily Park".to_string(),
            age: "1주일 전".to_string(),
            replies: Vec::new(),
        },
        SentMessage {
            id: "4".to_string(),
            content: "명확하게 설명하는 데 시간을 할애해주셔서 정말 감사해요.".to_string(),
            recipient_name: "John Doe".to_string(),
            age: "2주일 전".to_string(),
            replies: vec![reply("r4", "도움이 되었다니 기쁩니다!", "1주일 전", true)],
        },
    ]
}

fn notification(
    id: &str,
    kind: NotificationKind,
    age: &str,
    read: bool,
) -> Notification {
    let (title, message) = match kind {
        NotificationKind::Compliment => ("New compliment", "You received a new compliment"),
        NotificationKind::ThankYou => ("Thank you received", "Someone thanked you for your compliment"),
        NotificationKind::Milestone => ("Milestone", "You reached 10 compliments"),
        NotificationKind::System => ("Points added", "You received bonus points"),
    };
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        age: age.to_string(),
        read,
    }
}

pub fn notifications() -> Vec<Notification> {
    vec![
        notification("1", NotificationKind::Compliment, "5분 전", false),
        notification("2", NotificationKind::Compliment, "2시간 전", false),
        notification("3", NotificationKind::ThankYou, "5시간 전", false),
        notification("4", NotificationKind::Milestone, "1일 전", true),
        notification("5", NotificationKind::Compliment, "2일 전", true),
        notification("6", NotificationKind::System, "3일 전", true),
    ]
}

pub fn insights() -> Insights {
    let keywords = [
        ("도움이 되는", 12),
        ("창의적인", 9),
        ("긍정적인", 8),
        ("전문적인", 6),
        ("친절한", 5),
    ];
    let timeline = [
        ("1월", 5),
        ("2월", 8),
        ("3월", 12),
        ("4월", 15),
        ("5월", 18),
        ("6월", 22),
    ];
    Insights {
        keywords: keywords
            .into_iter()
            .map(|(keyword, count)| KeywordCount {
                keyword: keyword.to_string(),
                count,
            })
            .collect(),
        timeline: timeline
            .into_iter()
            .map(|(month, count)| MonthlyCount {
                month: month.to_string(),
                count,
            })
            .collect(),
        growth_rate: 23,
        is_subscriber: false,
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "Alex Johnson".to_string(),
        department: "Product Design".to_string(),
        career: "3 years experience".to_string(),
        avatar: "👤".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_within_each_fixture() {
        fn unique<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
            let mut seen = std::collections::HashSet::new();
            ids.into_iter().all(|id| seen.insert(id))
        }

        assert!(unique(contacts().iter().map(|c| c.id.as_str())));
        assert!(unique(received_messages().iter().map(|m| m.id.as_str())));
        assert!(unique(notifications().iter().map(|n| n.id.as_str())));
    }

    #[test]
    fn two_inbox_messages_start_locked() {
        assert_eq!(received_messages().iter().filter(|m| m.locked).count(), 2);
    }
}
