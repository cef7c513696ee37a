//! Demo content the store starts with.

use chrono::NaiveDate;

use crate::model::*;
use crate::RecordId;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn id(raw: &str) -> RecordId {
    RecordId::new(raw).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn hours(weekdays: &str, saturday: &str, sunday: &str) -> WorkingHours {
    WorkingHours {
        weekdays: weekdays.into(),
        saturday: saturday.into(),
        sunday: sunday.into(),
    }
}

pub fn branches() -> Vec<Branch> {
    vec![
        Branch {
            id: id("branch-1"),
            name: "ParsFit™ Çankaya".into(),
            address: "Atatürk Cad. No:123, Çankaya/Ankara".into(),
            phone: "0312 123 45 67".into(),
            email: "cankaya@parsfit.com".into(),
            manager: "Elif Demir".into(),
            capacity: 20,
            working_hours: hours("09:00 - 21:00", "09:00 - 18:00", "10:00 - 17:00"),
            services: strings(&["service-1", "service-2", "service-3"]),
            is_active: true,
            opening_date: date(2020, 1, 15),
            image: "/images/branch-cankaya.jpg".into(),
        },
        Branch {
            id: id("branch-2"),
            name: "ParsFit™ Keçiören".into(),
            address: "Cumhuriyet Cad. No:456, Keçiören/Ankara".into(),
            phone: "0312 234 56 78".into(),
            email: "kecioren@parsfit.com".into(),
            manager: "Can Yılmaz".into(),
            capacity: 15,
            working_hours: hours("09:00 - 21:00", "09:00 - 18:00", "Kapalı"),
            services: strings(&["service-1", "service-2"]),
            is_active: true,
            opening_date: date(2021, 6, 1),
            image: "/images/branch-kecioren.jpg".into(),
        },
        Branch {
            id: id("branch-3"),
            name: "ParsFit™ Mamak".into(),
            address: "İstiklal Cad. No:789, Mamak/Ankara".into(),
            phone: "0312 345 67 89".into(),
            email: "mamak@parsfit.com".into(),
            manager: "Zeynep Kaya".into(),
            capacity: 25,
            working_hours: hours("08:00 - 22:00", "09:00 - 19:00", "10:00 - 18:00"),
            services: strings(&["service-1", "service-2", "service-3", "service-4"]),
            is_active: true,
            opening_date: date(2022, 3, 15),
            image: "/images/branch-mamak.jpg".into(),
        },
    ]
}

pub fn hero() -> HeroContent {
    HeroContent {
        id: "hero-1".into(),
        title: "Türkiye'nin En Modern EMS Studio'su".into(),
        subtitle: "ParsFit™ EMS Studio".into(),
        description: "20 dakikada 3 saatlik antrenman etkisi. Elektriksel kas stimülasyonu ile \
                      maksimum verim. 3 şubemizle hizmetinizdeyiz."
            .into(),
        button_text: "Ücretsiz Deneme".into(),
        button_link: "/randevu".into(),
        background_image: "/images/hero-bg.jpg".into(),
        is_active: true,
    }
}

pub fn about() -> AboutContent {
    AboutContent {
        id: "about-1".into(),
        title: "ParsFit™ Hakkında".into(),
        subtitle: "EMS Teknolojisinde Öncü".into(),
        description: "2020'den beri EMS teknolojisi ile fitness dünyasında devrim yaratıyoruz. \
                      Profesyonel koçlarımız ve son teknoloji ekipmanlarımızla hedeflerinize \
                      ulaşmanızı sağlıyoruz. Ankara'da 3 şubemizle hizmet veriyoruz."
            .into(),
        features: strings(&[
            "Profesyonel EMS Ekipmanları",
            "Sertifikalı Antrenörler",
            "Kişiselleştirilmiş Programlar",
            "Hijyenik Ortam",
            "Esnek Randevu Sistemi",
            "3 Şube ile Geniş Hizmet Ağı",
        ]),
        image: "/images/about-studio.jpg".into(),
        stats: AboutStats {
            experience: "4+ Yıl".into(),
            clients: "500+".into(),
            success: "%95".into(),
            branches: "3".into(),
        },
        is_active: true,
    }
}

pub fn services() -> Vec<ServiceContent> {
    vec![
        ServiceContent {
            id: id("service-1"),
            name: "EMS Kişisel Antrenman".into(),
            description: "Kişisel koçunuz eşliğinde özel tasarlanmış EMS antrenman programı. \
                          Birebir ilgi ve maksimum verim."
                .into(),
            short_description: "Birebir koçluk hizmeti".into(),
            price: 150,
            duration: 20,
            features: strings(&[
                "Kişisel koç",
                "Özel program",
                "Beslenme danışmanlığı",
                "İlerleme takibi",
            ]),
            image: "/images/personal-training.jpg".into(),
            category: "personal".into(),
            is_active: true,
            order: 1,
            available_branches: strings(&["branch-1", "branch-2", "branch-3"]),
        },
        ServiceContent {
            id: id("service-2"),
            name: "EMS Grup Antrenmanı".into(),
            description: "Arkadaşlarınızla birlikte motivasyonlu grup antrenmanları. Sosyal \
                          ortamda eğlenceli fitness."
                .into(),
            short_description: "Grup halinde antrenman".into(),
            price: 100,
            duration: 25,
            features: strings(&["Grup motivasyonu", "Sosyal ortam", "Uygun fiyat", "Eğlenceli"]),
            image: "/images/group-training.jpg".into(),
            category: "group".into(),
            is_active: true,
            order: 2,
            available_branches: strings(&["branch-1", "branch-2", "branch-3"]),
        },
        ServiceContent {
            id: id("service-3"),
            name: "Kilo Verme Programı".into(),
            description: "EMS teknolojisi ile hızlı ve etkili kilo verme. Beslenme \
                          danışmanlığı dahil."
                .into(),
            short_description: "Hızlı kilo verme".into(),
            price: 200,
            duration: 30,
            features: strings(&[
                "Hızlı sonuç",
                "Beslenme planı",
                "Düzenli takip",
                "Motivasyon desteği",
            ]),
            image: "/images/weight-loss.jpg".into(),
            category: "program".into(),
            is_active: true,
            order: 3,
            available_branches: strings(&["branch-1", "branch-3"]),
        },
        ServiceContent {
            id: id("service-4"),
            name: "Kas Geliştirme".into(),
            description: "EMS ile kas kütlesi artırma ve vücut şekillendirme programı.".into(),
            short_description: "Kas kütlesi artırma".into(),
            price: 180,
            duration: 25,
            features: strings(&[
                "Kas gelişimi",
                "Vücut şekillendirme",
                "Protein desteği",
                "Uzman takibi",
            ]),
            image: "/images/muscle-building.jpg".into(),
            category: "program".into(),
            is_active: true,
            order: 4,
            available_branches: strings(&["branch-3"]),
        },
    ]
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    let all_branches = strings(&["branch-1", "branch-2", "branch-3"]);
    vec![
        PricingPlan {
            id: id("plan-1"),
            name: "Başlangıç".into(),
            price: 299,
            period: "ay".into(),
            description: "EMS'e yeni başlayanlar için ideal paket".into(),
            features: strings(&[
                "4 Seans/Ay",
                "Temel Program",
                "WhatsApp Desteği",
                "Tüm Şubelerde Geçerli",
            ]),
            is_popular: false,
            is_active: true,
            order: 1,
            available_branches: all_branches.clone(),
        },
        PricingPlan {
            id: id("plan-2"),
            name: "Profesyonel".into(),
            price: 499,
            period: "ay".into(),
            description: "Düzenli antrenman yapanlar için".into(),
            features: strings(&[
                "8 Seans/Ay",
                "Kişisel Program",
                "Beslenme Danışmanlığı",
                "Öncelikli Randevu",
                "Şube Değişim Hakkı",
            ]),
            is_popular: true,
            is_active: true,
            order: 2,
            available_branches: all_branches.clone(),
        },
        PricingPlan {
            id: id("plan-3"),
            name: "Elite".into(),
            price: 799,
            period: "ay".into(),
            description: "Maksimum sonuç isteyenler için".into(),
            features: strings(&[
                "12 Seans/Ay",
                "VIP Program",
                "Kişisel Beslenme Koçu",
                "Sınırsız Danışmanlık",
                "Tüm Şubelerde VIP",
            ]),
            is_popular: false,
            is_active: true,
            order: 3,
            available_branches: all_branches,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: id("testimonial-1"),
            name: "Ayşe Demir".into(),
            role: "Pazarlama Müdürü".into(),
            content: "ParsFit Çankaya şubesinde 3 ayda 8 kilo verdim. 20 dakikalık seanslar çok \
                      etkili! Koçlarım çok ilgili."
                .into(),
            rating: 5,
            image: "/images/testimonial-1.jpg".into(),
            branch_id: "branch-1".into(),
            is_active: true,
            order: 1,
            date: date(2024, 1, 10),
        },
        Testimonial {
            id: id("testimonial-2"),
            name: "Mehmet Kaya".into(),
            role: "Mühendis".into(),
            content: "Keçiören şubesinde antrenman yapıyorum. Yoğun iş tempomu düşününce EMS \
                      antrenmanı mükemmel bir çözüm."
                .into(),
            rating: 5,
            image: "/images/testimonial-2.jpg".into(),
            branch_id: "branch-2".into(),
            is_active: true,
            order: 2,
            date: date(2024, 1, 8),
        },
        Testimonial {
            id: id("testimonial-3"),
            name: "Zeynep Özkan".into(),
            role: "Öğretmen".into(),
            content: "Mamak şubesinin atmosferi harika. Grup antrenmanları çok eğlenceli ve \
                      motivasyonum her zaman yüksek."
                .into(),
            rating: 5,
            image: "/images/testimonial-3.jpg".into(),
            branch_id: "branch-3".into(),
            is_active: true,
            order: 3,
            date: date(2024, 1, 5),
        },
    ]
}

const BLOG_1_CONTENT: &str = "EMS (Elektriksel Kas Stimülasyonu) teknolojisi, kaslarınızı doğal sinir sinyallerini taklit eden elektriksel impulslarla çalıştırır. Bu teknoloji, geleneksel antrenmanların sağladığı faydaları çok daha kısa sürede elde etmenizi sağlar.

## EMS Nasıl Çalışır?

EMS cihazları, kaslarınıza düşük frekanslı elektriksel sinyaller gönderir. Bu sinyaller:
- Kas liflerini doğrudan uyarır
- Daha fazla kas lifinin aynı anda çalışmasını sağlar
- Metabolizmayı hızlandırır
- Kan dolaşımını artırır

## Bilimsel Kanıtlar

Yapılan araştırmalar gösteriyor ki:
- 20 dakikalık EMS seansı, 3 saatlik geleneksel antrenmana eşdeğer
- Kas kütlesi artışı %30 daha hızlı
- Yağ yakımı %25 daha etkili

ParsFit™ olarak, bu teknolojinin gücünü 3 şubemizde deneyimleyebilirsiniz.";

const BLOG_2_CONTENT: &str = "Modern yaşamın hızlı temposu içinde spor yapmak için zaman bulmak giderek zorlaşıyor. İşte tam bu noktada EMS teknolojisi devreye giriyor ve size zamandan tasarruf ettirirken maksimum sonuç veriyor.

## Zaman Verimliliği

Geleneksel spor salonlarında:
- Isınma: 15 dakika
- Ana antrenman: 60-90 dakika
- Soğuma: 15 dakika
- Toplam: 90-120 dakika

EMS ile:
- Hazırlık: 5 dakika
- Ana antrenman: 20 dakika
- Toplam: 25 dakika

## Neden Bu Kadar Etkili?

EMS teknolojisi sayesinde:
- Tüm kas grupları aynı anda çalışır
- %90'a varan kas lifi aktivasyonu
- Yüksek kalori yakımı
- Hızlı toparlanma

ParsFit™'in 3 şubesinde bu teknolojinin gücünü deneyimleyin!";

const BLOG_3_CONTENT: &str = "EMS antrenmanlarından maksimum fayda sağlamak için beslenmenizin de optimize edilmesi gerekir. Doğru beslenme stratejileri ile EMS'in etkisini katlamak mümkün.

## Antrenman Öncesi Beslenme

EMS seansından 2 saat önce:
- Hafif karbonhidrat alımı
- Bol su tüketimi
- Kafein (isteğe bağlı)

## Antrenman Sonrası Beslenme

Seans sonrası 30 dakika içinde:
- Protein ağırlıklı öğün
- Karmaşık karbonhidratlar
- Antioksidan açısından zengin besinler

## Önerilen Besinler

- Tavuk göğsü
- Quinoa
- Yeşil yapraklı sebzeler
- Yaban mersini
- Badem

ParsFit™ uzmanlarımız size kişiselleştirilmiş beslenme planı hazırlayabilir.";

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: id("blog-1"),
            title: "EMS Antrenmanının Bilimsel Temelleri".into(),
            slug: "ems-antrenmaninin-bilimsel-temelleri".into(),
            excerpt: "EMS teknolojisinin nasıl çalıştığını ve neden bu kadar etkili olduğunu \
                      bilimsel açıdan inceleyelim."
                .into(),
            content: BLOG_1_CONTENT.into(),
            author: "Dr. Mehmet Özkan".into(),
            author_image: "/images/author-1.jpg".into(),
            image: "/images/blog-1.jpg".into(),
            category: "Bilim".into(),
            tags: strings(&["EMS", "Bilim", "Teknoloji", "Araştırma"]),
            published_at: date(2024, 1, 10),
            status: PostStatus::Published,
            views: 1250,
            likes: 45,
            comments: 12,
            is_active: true,
            is_featured: true,
        },
        BlogPost {
            id: id("blog-2"),
            title: "20 Dakikada Maksimum Verim: EMS'in Sırrı".into(),
            slug: "20-dakikada-maksimum-verim-emsin-sirri".into(),
            excerpt: "Geleneksel antrenmanların saatlerini 20 dakikaya nasıl sığdırdığımızı \
                      öğrenin."
                .into(),
            content: BLOG_2_CONTENT.into(),
            author: "Antrenör Ayşe Demir".into(),
            author_image: "/images/author-2.jpg".into(),
            image: "/images/blog-2.jpg".into(),
            category: "Antrenman".into(),
            tags: strings(&["Verimlilik", "Zaman", "EMS", "Antrenman"]),
            published_at: date(2024, 1, 8),
            status: PostStatus::Published,
            views: 890,
            likes: 67,
            comments: 18,
            is_active: true,
            is_featured: false,
        },
        BlogPost {
            id: id("blog-3"),
            title: "Beslenme ve EMS: Mükemmel İkili".into(),
            slug: "beslenme-ve-ems-mukemmel-ikili".into(),
            excerpt: "EMS antrenmanlarınızın etkisini artırmak için doğru beslenme \
                      stratejileri."
                .into(),
            content: BLOG_3_CONTENT.into(),
            author: "Dyt. Zeynep Kaya".into(),
            author_image: "/images/author-3.jpg".into(),
            image: "/images/blog-3.jpg".into(),
            category: "Beslenme".into(),
            tags: strings(&["Beslenme", "Diyet", "Sağlık", "EMS"]),
            published_at: date(2024, 1, 5),
            status: PostStatus::Published,
            views: 1100,
            likes: 89,
            comments: 24,
            is_active: true,
            is_featured: false,
        },
    ]
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        id: "contact-1".into(),
        address: "Merkez: Atatürk Cad. No:123, Çankaya/Ankara".into(),
        phone: "0312 123 45 67".into(),
        email: "info@parsfit.com".into(),
        working_hours: hours("09:00 - 21:00", "09:00 - 18:00", "10:00 - 17:00"),
        social_media: SocialLinks {
            facebook: "https://facebook.com/parsfit".into(),
            instagram: "https://instagram.com/parsfit".into(),
            twitter: "https://twitter.com/parsfit".into(),
            youtube: "https://youtube.com/parsfit".into(),
            whatsapp: "https://wa.me/905321234567".into(),
        },
    }
}

pub fn users() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: id("1"),
            name: "Ayşe Demir".into(),
            email: "ayse@email.com".into(),
            phone: "0532 123 45 67".into(),
            date_of_birth: Some(date(1990, 5, 15)),
            gender: Some(Gender::Female),
            address: Some("Çankaya, Ankara".into()),
            preferred_branch: Some("branch-1".into()),
            emergency_contact: None,
            medical_info: None,
            preferences: None,
            membership: Some(UserMembership {
                id: "mem-1".into(),
                user_id: "1".into(),
                plan_id: "plan-2".into(),
                plan_name: "Profesyonel".into(),
                branch_id: "branch-1".into(),
                branch_name: "ParsFit™ Çankaya".into(),
                start_date: date(2024, 1, 10),
                end_date: date(2024, 2, 10),
                status: MembershipStatus::Active,
                remaining_sessions: 6,
                total_sessions: 8,
                price: 499,
                payment_status: PaymentStatus::Paid,
                auto_renew: true,
            }),
            join_date: date(2024, 1, 10),
            last_login: Some(date(2024, 1, 15)),
            status: AccountStatus::Active,
            role: ProfileRole::User,
        },
        UserProfile {
            id: id("2"),
            name: "Mehmet Kaya".into(),
            email: "mehmet@email.com".into(),
            phone: "0532 234 56 78".into(),
            date_of_birth: Some(date(1985, 8, 22)),
            gender: Some(Gender::Male),
            address: Some("Keçiören, Ankara".into()),
            preferred_branch: Some("branch-2".into()),
            emergency_contact: None,
            medical_info: None,
            preferences: None,
            membership: Some(UserMembership {
                id: "mem-2".into(),
                user_id: "2".into(),
                plan_id: "plan-1".into(),
                plan_name: "Başlangıç".into(),
                branch_id: "branch-2".into(),
                branch_name: "ParsFit™ Keçiören".into(),
                start_date: date(2024, 1, 9),
                end_date: date(2024, 2, 9),
                status: MembershipStatus::Active,
                remaining_sessions: 2,
                total_sessions: 4,
                price: 299,
                payment_status: PaymentStatus::Paid,
                auto_renew: false,
            }),
            join_date: date(2024, 1, 9),
            last_login: Some(date(2024, 1, 14)),
            status: AccountStatus::Active,
            role: ProfileRole::User,
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: id("apt-1"),
            user_id: "1".into(),
            user_name: "Ayşe Demir".into(),
            user_phone: "0532 123 45 67".into(),
            branch_id: "branch-1".into(),
            branch_name: "ParsFit™ Çankaya".into(),
            service_id: "service-1".into(),
            service_name: "EMS Kişisel Antrenman".into(),
            coach_id: "coach-1".into(),
            coach_name: "Elif Hanım".into(),
            date: date(2024, 1, 15),
            time: "14:00".into(),
            duration: 20,
            price: 150,
            status: AppointmentStatus::Scheduled,
            notes: None,
            created_at: date(2024, 1, 10),
        },
        Appointment {
            id: id("apt-2"),
            user_id: "2".into(),
            user_name: "Mehmet Kaya".into(),
            user_phone: "0532 234 56 78".into(),
            branch_id: "branch-2".into(),
            branch_name: "ParsFit™ Keçiören".into(),
            service_id: "service-2".into(),
            service_name: "EMS Grup Antrenmanı".into(),
            coach_id: "coach-2".into(),
            coach_name: "Can Bey".into(),
            date: date(2024, 1, 15),
            time: "15:00".into(),
            duration: 25,
            price: 100,
            status: AppointmentStatus::Completed,
            notes: None,
            created_at: date(2024, 1, 8),
        },
    ]
}
