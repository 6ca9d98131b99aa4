//! Hardcoded content the dashboard renders. In production every function in
//! this module would be an API call.

use crate::models::offer::Offer;
use crate::models::review::Review;
use crate::models::stats::UserStats;
use crate::models::transaction::{Transaction, TransactionKind};

pub fn user_stats() -> UserStats {
    UserStats {
        balance: 1250,
        total_earnings: 3250,
        referrals: 5,
        completed_offers: 12,
        active_days: 7,
        hold_balance: 750,
    }
}

/// Minimum amount accepted by the withdrawal form, in rubles.
pub const MIN_WITHDRAWAL: u32 = 500;

pub fn active_offers() -> Vec<Offer> {
    let raw = [
        ("Кредитная карта Альфа-Банк", 500, "Оформите карту с льготным периодом", 245, "15-30 мин"),
        ("РКО для ИП в Тинькофф", 300, "Откройте расчетный счет для бизнеса", 189, "20-40 мин"),
        ("Микрозайм в Lime", 150, "Первый займ под 0%", 567, "5-10 мин"),
        ("Страхование ОСАГО", 200, "Оформите полис онлайн", 89, "10-20 мин"),
        ("Инвестиции в Тинькофф", 400, "Откройте брокерский счет", 134, "15-25 мин"),
    ];
    raw.into_iter()
        .map(|(title, reward, description, completed_count, estimated_time)| Offer {
            title: title.to_string(),
            reward,
            description: description.to_string(),
            completed_count,
            estimated_time: estimated_time.to_string(),
        })
        .collect()
}

pub fn transactions() -> Vec<Transaction> {
    let raw = [
        (TransactionKind::Income, "Кредитная карта ВТБ", 500, "Сегодня, 14:30"),
        (TransactionKind::Outcome, "Вывод на карту", 1000, "Вчера, 18:15"),
        (TransactionKind::Income, "Реферальное вознаграждение", 150, "21.03.2024"),
        (TransactionKind::Income, "Микрозайм Lime", 150, "20.03.2024"),
        (TransactionKind::Income, "ОСАГО", 200, "19.03.2024"),
    ];
    raw.into_iter()
        .map(|(kind, title, amount, date)| Transaction {
            kind,
            title: title.to_string(),
            amount,
            date: date.to_string(),
        })
        .collect()
}

/// Reviews seeded on the first empty read of the `reviews` key.
pub fn default_reviews() -> Vec<Review> {
    let raw = [
        (1, "Александр", 5, "Отличный бот! Уже заработал 3000 рублей за неделю. Оформление карты заняло 15 минут, деньги пришли через час.", "22.03.2024", 24, 1),
        (2, "Мария", 5, "Очень удобное приложение. Реферальная система работает отлично, уже пригласила 3 друзей.", "21.03.2024", 18, 0),
        (3, "Дмитрий", 4, "Хороший выбор предложений. Есть мелкие баги в интерфейсе, но в целом все работает.", "20.03.2024", 12, 2),
        (4, "Елена", 5, "Вывод средств быстрый, на карту пришли за 1 день. Буду рекомендовать друзьям!", "19.03.2024", 31, 0),
    ];
    raw.into_iter()
        .map(|(id, user, rating, text, date, likes, dislikes)| Review {
            id,
            user: user.to_string(),
            rating,
            text: text.to_string(),
            date: date.to_string(),
            likes,
            dislikes,
        })
        .collect()
}

/// FAQ entries on the help page.
pub fn faq_entries() -> Vec<(String, String)> {
    let raw = [
        (
            "Как вывести заработанные деньги?",
            "Откройте страницу \"Баланс\" и нажмите \"Вывести\". Минимальная сумма вывода - 500 ₽, деньги приходят в течение 1-2 дней.",
        ),
        (
            "Почему часть баланса в холде?",
            "Вознаграждение за предложение замораживается, пока партнер подтверждает выполнение. Обычно это занимает до 7 дней.",
        ),
        (
            "Как работает реферальная программа?",
            "Поделитесь своей ссылкой с друзьями. Вы получаете 10% от заработка каждого приглашенного пользователя.",
        ),
        (
            "Что делать, если предложение не засчиталось?",
            "Напишите в поддержку через бота и приложите скриншот выполнения. Мы разберемся в течение 24 часов.",
        ),
    ];
    raw.into_iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect()
}

/// Deep link to the bot, also the base of the referral link.
pub const BOT_URL: &str = "https://t.me/finance_helper_bot";

pub fn referral_link(user_id: i64) -> String {
    format!("{BOT_URL}?start=ref{user_id}")
}
