//! Fixed records loaded into a fresh store

use crate::models::{Comment, Post, User};

fn user(id: u64, name: &str, email: &str, age: u32) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

fn post(id: u64, user_id: u64, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn comment(id: u64, post_id: u64, name: &str, body: &str) -> Comment {
    Comment {
        id,
        post_id,
        name: name.to_string(),
        body: body.to_string(),
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        user(1, "田中太郎", "tanaka@example.com", 28),
        user(2, "佐藤花子", "sato@example.com", 32),
        user(3, "山田一郎", "yamada@example.com", 45),
        user(4, "鈴木美香", "suzuki@example.com", 23),
        user(5, "高橋健太", "takahashi@example.com", 37),
    ]
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        post(1, 1, "Reactの基本", "Reactコンポーネントの作り方について"),
        post(2, 1, "Hooksの使い方", "useState、useEffectなどの解説"),
        post(3, 2, "CSSテクニック", "モダンなレイアウトの実装方法"),
        post(4, 3, "状態管理入門", "ReduxとContext APIの比較"),
        post(5, 4, "API連携のベストプラクティス", "フロントエンドからのデータ取得テクニック"),
    ]
}

pub fn seed_comments() -> Vec<Comment> {
    vec![
        comment(1, 1, "匿名ユーザー", "とても参考になりました！"),
        comment(2, 1, "React初心者", "もう少し詳しく説明してほしいです"),
        comment(3, 2, "開発者A", "カスタムフックについても知りたいです"),
        comment(4, 3, "デザイナー", "素晴らしい記事ですね"),
        comment(5, 5, "バックエンド開発者", "フロントとバックの連携について補足します"),
    ]
}
